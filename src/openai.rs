use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
        CreateChatCompletionResponse,
    },
};

use crate::error::GreeterError;

/// Model the greeting is sent to. Fixed, never configurable.
pub const GREETING_MODEL: &str = "gpt-3.5-turbo";

/// The one message the greeter ever sends.
pub const GREETING_PROMPT: &str = "Hello!";

/// Build the fixed chat request: exactly one user message with the greeting
/// content, addressed to [`GREETING_MODEL`]. No templating, no user input.
pub fn greeting_request() -> CreateChatCompletionRequest {
    let messages = vec![ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(GREETING_PROMPT.to_string()),
            name: None,
        },
    )];

    CreateChatCompletionRequest {
        model: GREETING_MODEL.to_string(),
        messages,
        ..Default::default()
    }
}

/// Send the greeting to the chat completion endpoint.
///
/// One synchronous-in-spirit call: the future blocks the whole run until the
/// service answers or the transport fails. No timeout, no retry; any
/// `OpenAIError` (network, auth, quota) propagates unrecovered.
///
/// `base_url` overrides the API base, for tests against a local mock server.
pub async fn send_greeting(
    api_key: &str,
    base_url: Option<&str>,
) -> Result<CreateChatCompletionResponse, GreeterError> {
    let mut config = OpenAIConfig::new().with_api_key(api_key);

    if let Some(url) = base_url {
        config = config.with_api_base(url);
    }

    let client = Client::with_config(config);

    let response = client.chat().create(greeting_request()).await?;

    Ok(response)
}

/// Pull the assistant's reply out of a response: the first choice's message
/// content. A response with no choices or no content is a structural error,
/// not an empty reply.
pub fn extract_reply(response: &CreateChatCompletionResponse) -> Result<String, GreeterError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| GreeterError::MalformedResponse("response contained no choices".into()))?;

    choice.message.content.clone().ok_or_else(|| {
        GreeterError::MalformedResponse("first choice carried no message content".into())
    })
}
