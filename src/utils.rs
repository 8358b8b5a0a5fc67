/// Number of characters kept at each end of a redacted credential.
const REDACT_KEEP: usize = 5;

/// Redact a credential for log output: first 5 and last 5 characters joined
/// by `...`, so an operator can confirm which key loaded without the full
/// secret landing in logs.
///
/// Values shorter than 10 characters are masked entirely — keeping a prefix
/// and suffix of something that short would reveal most of it, and a fixed
/// mask avoids leaking the length too.
pub fn redact_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();

    if chars.len() < 2 * REDACT_KEEP {
        return "*****".to_string();
    }

    let prefix: String = chars[..REDACT_KEEP].iter().collect();
    let suffix: String = chars[chars.len() - REDACT_KEEP..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
