use async_trait::async_trait;
use log::error;
use serde::{Deserialize, Serialize};

use crate::gemichef::clients::http_pool::get_http_client;
use crate::gemichef::config::GemichefConfig;
use crate::gemichef::error::{GemichefError, Result};
use crate::gemichef::media::ImagePayload;
use crate::gemichef::model_client::{Message, ModelClient};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// [`ModelClient`] over the native `generateContent` REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    chat_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(config: &GemichefConfig) -> Self {
        Self::new_with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Point the client at a custom base URL, e.g. a local test server.
    /// The default is `<https://generativelanguage.googleapis.com/v1beta>`.
    pub fn new_with_base_url(config: &GemichefConfig, base_url: &str) -> Self {
        GeminiClient {
            http: get_http_client(base_url),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!("GeminiClient::generate: {} returned {}: {}", model, status, message);
            return Err(GemichefError::Api(format!("{}: {}", status, message)));
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn send_chat(&self, system_instruction: &str, history: &[Message]) -> Result<String> {
        let request = GenerateContentRequest {
            contents: history.iter().map(Content::from_message).collect(),
            system_instruction: Some(SystemInstruction {
                parts: vec![Part::text(system_instruction)],
            }),
            generation_config: None,
        };

        let response = self.generate(&self.chat_model, &request).await?;
        response.first_text().ok_or_else(|| {
            GemichefError::Api("response contained no text candidates".to_string())
        })
    }

    async fn analyze_image(&self, image: &ImagePayload, instruction: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_parts(vec![
                Part::inline_image(image),
                Part::text(instruction),
            ])],
            system_instruction: None,
            generation_config: None,
        };

        let response = self.generate(&self.chat_model, &request).await?;
        response.first_text().ok_or_else(|| {
            GemichefError::Api("response contained no text candidates".to_string())
        })
    }

    async fn edit_image(&self, image: &ImagePayload, instruction: &str) -> Result<ImagePayload> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_parts(vec![
                Part::inline_image(image),
                Part::text(instruction),
            ])],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            }),
        };

        let response = self.generate(&self.image_model, &request).await?;
        // First image wins; any further image parts are ignored.
        response
            .first_image()
            .ok_or(GemichefError::NoImageProduced)
    }

    fn chat_model(&self) -> &str {
        &self.chat_model
    }

    fn image_model(&self) -> &str {
        &self.image_model
    }
}

// Wire models for the v1beta generateContent endpoint.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn from_message(message: &Message) -> Self {
        Content {
            role: message.role.as_str().to_string(),
            parts: vec![Part::text(&message.text)],
        }
    }

    fn user_parts(parts: Vec<Part>) -> Self {
        Content {
            role: "user".to_string(),
            parts,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Part {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_image(image: &ImagePayload) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline-data part of the first candidate.
    fn first_image(&self) -> Option<ImagePayload> {
        let content = self.candidates.first()?.content.as_ref()?;
        content
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| ImagePayload {
                data: inline.data.clone(),
                mime_type: inline.mime_type.clone(),
            })
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}
