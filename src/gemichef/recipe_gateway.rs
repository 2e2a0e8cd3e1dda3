//! The orchestration core: one place that turns caller intents into
//! well-formed model calls and normalizes the three response shapes and
//! their failure modes into the crate's error taxonomy.

use std::sync::Arc;

use log::error;

use crate::gemichef::chat_session::ChatSession;
use crate::gemichef::clients::gemini::GeminiClient;
use crate::gemichef::config::GemichefConfig;
use crate::gemichef::error::{GemichefError, Result};
use crate::gemichef::media::ImagePayload;
use crate::gemichef::model_client::ModelClient;
use crate::gemichef::prompts;

/// Message surfaced to the user when image analysis fails in transit.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to get recipe from the image. Please try again.";

/// Message surfaced to the user when an image edit fails in transit.
pub const EDIT_FAILED_MESSAGE: &str = "Failed to edit the image. Please try again.";

/// Entry point for the three model capabilities: stateful recipe chat,
/// single-shot image-to-recipe analysis, and single-shot image editing.
///
/// The gateway validates inputs locally before any network call, so a
/// missing image or empty instruction never surfaces as a remote-error
/// class. It never retries; retry is always an explicit caller action.
pub struct RecipeGateway {
    client: Arc<dyn ModelClient>,
}

impl RecipeGateway {
    /// Build a gateway over an existing client.
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        RecipeGateway { client }
    }

    /// Build a Gemini-backed gateway from the environment.
    ///
    /// This is the process-start seam: a missing `GEMINI_API_KEY` is
    /// returned as the fatal [`GemichefError::Configuration`].
    pub fn from_env() -> Result<Self> {
        let config = GemichefConfig::from_env()?;
        Ok(RecipeGateway::new(Arc::new(GeminiClient::new(&config))))
    }

    /// Open a new conversation with the chef persona.
    ///
    /// No network call happens; the session accepts turns immediately.
    pub fn open_conversation(&self) -> ChatSession {
        ChatSession::new(
            self.client.clone(),
            prompts::CHEF_SYSTEM_INSTRUCTION.to_string(),
        )
    }

    /// Analyze one image against one instruction and return the model's
    /// markdown-flavored text. Stateless; independent calls never
    /// interfere.
    pub async fn describe_image(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> Result<String> {
        validate_image_request(image, instruction, "Please upload an image first.")?;

        match self.client.analyze_image(image, instruction.trim()).await {
            Ok(text) => Ok(text),
            Err(err) => {
                error!("RecipeGateway::describe_image failed: {}", err);
                Err(GemichefError::Analysis(ANALYSIS_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// Ask the model for a new image guided by the instruction.
    ///
    /// The input payload is never mutated; a wholly new payload is
    /// returned. A response that carries no image part is the distinct
    /// [`GemichefError::NoImageProduced`], not a transport failure.
    pub async fn transform_image(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> Result<ImagePayload> {
        validate_image_request(
            image,
            instruction,
            "Please upload an image and provide an editing prompt.",
        )?;

        match self.client.edit_image(image, instruction.trim()).await {
            Ok(edited) => Ok(edited),
            Err(GemichefError::NoImageProduced) => Err(GemichefError::NoImageProduced),
            Err(err) => {
                error!("RecipeGateway::transform_image failed: {}", err);
                Err(GemichefError::Analysis(EDIT_FAILED_MESSAGE.to_string()))
            }
        }
    }
}

/// Reject incomplete image requests before they reach the network.
fn validate_image_request(
    image: &ImagePayload,
    instruction: &str,
    message: &str,
) -> Result<()> {
    if image.data.is_empty() || instruction.trim().is_empty() {
        return Err(GemichefError::InvalidInput(message.to_string()));
    }
    Ok(())
}
