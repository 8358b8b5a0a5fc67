use colored::*;
use openai_greeter::{
    GreeterError, extract_reply, load_credential, redact_credential, send_greeting,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "❌".bright_red(), e.to_string().bright_red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GreeterError> {
    // Fail fast before any network activity if the key is missing
    let api_key = load_credential()?;

    println!(
        "✅ API Key Loaded Successfully: {}",
        redact_credential(&api_key)
    );

    let response = send_greeting(&api_key, None).await?;
    let reply = extract_reply(&response)?;

    println!("🤖 AI Response: {}", reply);

    Ok(())
}
