//! Configuration for gemichef.
//!
//! Everything is environment driven: the API key is required at process
//! start, the model names have defaults matching the hosted app. No TOML,
//! YAML, or other config-file parsing dependencies are introduced.

use std::env;

use crate::gemichef::error::{GemichefError, Result};

/// Chat and image-analysis model used when no override is set.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Image-editing model used when no override is set.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Runtime configuration for the Gemini-backed gateway.
#[derive(Clone, Debug)]
pub struct GemichefConfig {
    /// Credential for `generativelanguage.googleapis.com`.
    pub api_key: String,
    /// Model used for chat and image analysis.
    pub chat_model: String,
    /// Model used for image editing.
    pub image_model: String,
}

impl GemichefConfig {
    /// Build a config with the given key and the default model names.
    pub fn new(api_key: impl Into<String>) -> Self {
        GemichefConfig {
            api_key: api_key.into(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; a missing or empty key is a fatal
    /// startup condition, returned as [`GemichefError::Configuration`].
    /// `GEMICHEF_CHAT_MODEL` and `GEMICHEF_IMAGE_MODEL` override the model
    /// defaults when set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GemichefError::Configuration(format!("{} environment variable not set", API_KEY_VAR))
            })?;

        let mut config = GemichefConfig::new(api_key);
        if let Ok(model) = env::var("GEMICHEF_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Ok(model) = env::var("GEMICHEF_IMAGE_MODEL") {
            config.image_model = model;
        }
        Ok(config)
    }
}
