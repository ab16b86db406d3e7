//! Runtime configuration.
//!
//! Everything is read from command-line flags with environment variable
//! fallbacks, so the service can be configured either way.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// Consulted in order when `GEMINI_API_KEY` is not set.
pub const FALLBACK_KEY_VARS: [&str; 2] = ["GOOGLE_GEMINI_API_KEY", "NEXT_PUBLIC_GEMINI_API_KEY"];

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            max_output_tokens: 2048,
            top_k: 40,
            top_p: 0.9,
        }
    }
}

/// Settings for the Gemini question provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
    pub generation: GenerationSettings,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            generation: GenerationSettings::default(),
        }
    }
}

/// AI provider flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct AiArgs {
    /// Gemini API key (GOOGLE_GEMINI_API_KEY and NEXT_PUBLIC_GEMINI_API_KEY are also checked)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the generative language API
    #[arg(long, env = "QUIZ_AI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub ai_endpoint: String,

    /// Model used for question generation
    #[arg(long, env = "QUIZ_AI_MODEL", default_value = DEFAULT_MODEL)]
    pub ai_model: String,

    /// Seconds to wait for the AI provider before falling back
    #[arg(long, env = "QUIZ_AI_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub ai_timeout_secs: u64,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.8)]
    pub temperature: f32,
}

impl AiArgs {
    pub fn into_config(self) -> GeminiConfig {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(fallback_api_key);

        GeminiConfig {
            api_key,
            endpoint: self.ai_endpoint,
            model: self.ai_model,
            timeout: Duration::from_secs(self.ai_timeout_secs.max(1)),
            generation: GenerationSettings {
                temperature: self.temperature,
                ..GenerationSettings::default()
            },
        }
    }
}

fn fallback_api_key() -> Option<String> {
    FALLBACK_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}

/// Where the static question bank comes from.
#[derive(Args, Debug, Clone)]
pub struct BankArgs {
    /// JSON file to load the question bank from (defaults to the bundled bank)
    #[arg(long, env = "QUIZ_BANK_PATH")]
    pub bank: Option<PathBuf>,
}
