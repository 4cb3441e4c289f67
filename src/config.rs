use std::time::Duration;

use log::warn;

/// Value shipped in sample secrets files; never treated as a real key.
pub const PLACEHOLDER_API_KEY: &str = "sk-REPLACE_WITH_YOUR_KEY";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DB_PATH: &str = "db.sqlite";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a chemistry expert. Respond with the IUPAC name and a short explanation.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AssistantConfig {
    #[cfg(test)]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The key, unless it is missing, blank or still the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorConfig {
    pub assistant: AssistantConfig,
    pub db_path: String,
}

impl TutorConfig {
    /// Reads `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_MAX_TOKENS`,
    /// `OPENAI_TIMEOUT_SECS` and `TUTOR_DB_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AssistantConfig::default();

        let max_tokens = parse_or(&var, "OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS);
        let timeout_secs = parse_or(&var, "OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        let assistant = AssistantConfig {
            api_key: var("OPENAI_API_KEY"),
            model: var("OPENAI_MODEL").unwrap_or(defaults.model),
            max_tokens,
            system_prompt: defaults.system_prompt,
            timeout: Duration::from_secs(timeout_secs),
        };

        if assistant.usable_api_key().is_none() {
            warn!("OPENAI_API_KEY is not set, the naming assistant will stay disabled");
        }

        Self {
            assistant,
            db_path: var("TUTOR_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
        }
    }
}

fn parse_or<T: std::str::FromStr + std::fmt::Display>(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    match var(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}, using {}", name, raw, default);
            default
        }),
        None => default,
    }
}
