use std::time::Duration;

use async_trait::async_trait;
use chatgpt::client::ChatGPT;
use chatgpt::config::ChatGPTEngine;
use chatgpt::types::CompletionResponse;
use log::{debug, warn};

use crate::config::AssistantConfig;

const USER_PROMPT_PREFIX: &str = "Name this compound: ";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Please enter a compound formula or description.")]
    EmptyPrompt,
    #[error("OpenAI API key not found. Please set OPENAI_API_KEY.")]
    MissingCredential,
    #[error("The assistant returned no answer.")]
    EmptyResponse,
    #[error("{0}")]
    Transport(String),
}

/// Everything a backend needs for one chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub api_key: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub system_prompt: String,
    pub user_message: String,
}

/// One round trip to a chat-completion service. Returns the text of every choice, in order.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, String>;
}

/// OpenAI chat completions through `chatgpt_rs`.
pub struct OpenAiBackend {
    engine: ChatGPTEngine,
}

impl OpenAiBackend {
    pub fn new(model: &str) -> Self {
        let engine = match model {
            "gpt-3.5-turbo" => ChatGPTEngine::Gpt35Turbo,
            "gpt-4" => ChatGPTEngine::Gpt4,
            "gpt-4-32k" => ChatGPTEngine::Gpt4_32k,
            // The engine only holds &'static str; leaked once per process.
            other => ChatGPTEngine::Custom(Box::leak(other.to_string().into_boxed_str())),
        };
        Self { engine }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>, String> {
        let gpt = {
            let mut gpt = ChatGPT::new(request.api_key).map_err(|e| e.to_string())?;

            gpt.config.engine = self.engine.clone();
            gpt.config.max_tokens = Some(request.max_tokens);
            gpt.config.timeout = request.timeout;

            gpt
        };

        let mut conversation = gpt.new_conversation_directed(request.system_prompt);
        let response: CompletionResponse = conversation
            .send_message(request.user_message)
            .await
            .map_err(|e| e.to_string())?;

        Ok(response
            .message_choices
            .into_iter()
            .map(|choice| choice.message.content)
            .collect())
    }
}

/// Forwards `prompt` to the backend and returns the first choice, trimmed.
///
/// An empty prompt or an unusable API key short-circuits before any request is made.
pub async fn ask(
    backend: &dyn CompletionBackend,
    config: &AssistantConfig,
    prompt: &str,
) -> Result<String, AiError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AiError::EmptyPrompt);
    }
    let api_key = config.usable_api_key().ok_or(AiError::MissingCredential)?;

    debug!("Asking the assistant about: {:?}", prompt);

    let request = CompletionRequest {
        api_key: api_key.to_string(),
        max_tokens: config.max_tokens,
        timeout: config.timeout,
        system_prompt: config.system_prompt.clone(),
        user_message: format!("{}{}", USER_PROMPT_PREFIX, prompt),
    };

    let choices = backend.complete(request).await.map_err(|message| {
        warn!("Assistant request failed: {}", message);
        AiError::Transport(message)
    })?;
    let content = choices
        .into_iter()
        .next()
        .ok_or(AiError::EmptyResponse)?;

    debug!("Completion: {:?}", content);

    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLACEHOLDER_API_KEY;
    use std::sync::Mutex;

    /// Records every request and answers with a canned result.
    struct FakeBackend {
        reply: Result<Vec<String>, String>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeBackend {
        fn answering(text: &str) -> Self {
            Self::with_reply(Ok(vec![text.to_string()]))
        }

        fn failing(message: &str) -> Self {
            Self::with_reply(Err(message.to_string()))
        }

        fn with_reply(reply: Result<Vec<String>, String>) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for FakeBackend {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<Vec<String>, String> {
            self.requests.lock().unwrap().push(request);
            self.reply.clone()
        }
    }

    fn configured() -> AssistantConfig {
        AssistantConfig::default().with_api_key("sk-test")
    }

    #[tokio::test]
    async fn placeholder_key_never_reaches_the_network() {
        let backend = FakeBackend::answering("Ethanol");
        let config = AssistantConfig::default().with_api_key(PLACEHOLDER_API_KEY);

        let result = ask(&backend, &config, "C2H5OH").await;

        assert_eq!(result, Err(AiError::MissingCredential));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn absent_key_never_reaches_the_network() {
        let backend = FakeBackend::answering("Ethanol");

        let result = ask(&backend, &AssistantConfig::default(), "C2H5OH").await;

        assert_eq!(result, Err(AiError::MissingCredential));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_first() {
        let backend = FakeBackend::answering("Ethanol");

        let result = ask(&backend, &configured(), "   ").await;

        assert_eq!(result, Err(AiError::EmptyPrompt));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn successful_reply_is_trimmed_only() {
        let backend = FakeBackend::answering("  Ethanol – a two-carbon alcohol.\n");

        let result = ask(&backend, &configured(), "CH3CH2OH").await;

        assert_eq!(result, Ok("Ethanol – a two-carbon alcohol.".to_string()));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn request_carries_configuration() {
        let backend = FakeBackend::answering("Propane");
        let mut config = configured();
        config.max_tokens = 42;

        ask(&backend, &config, " a 3-carbon alkane ").await.unwrap();

        let requests = backend.requests.lock().unwrap();
        let request = &requests[0];
        assert_eq!(request.api_key, "sk-test");
        assert_eq!(request.max_tokens, 42);
        assert_eq!(
            request.system_prompt,
            "You are a chemistry expert. Respond with the IUPAC name and a short explanation."
        );
        assert_eq!(request.user_message, "Name this compound: a 3-carbon alkane");
    }

    #[tokio::test]
    async fn transport_failure_keeps_the_message() {
        let backend = FakeBackend::failing("connection refused");

        let result = ask(&backend, &configured(), "C2H5OH").await;

        assert_eq!(
            result,
            Err(AiError::Transport("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn no_choices_is_an_empty_response() {
        let backend = FakeBackend::with_reply(Ok(Vec::new()));

        let result = ask(&backend, &configured(), "C2H5OH").await;

        assert_eq!(result, Err(AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn identical_prompts_are_not_cached() {
        let backend = FakeBackend::answering("Ethanol");

        ask(&backend, &configured(), "C2H5OH").await.unwrap();
        ask(&backend, &configured(), "C2H5OH").await.unwrap();

        assert_eq!(backend.calls(), 2);
    }
}
