//! # gemichef
//!
//! gemichef is a Rust toolkit for building recipe-assistant applications on
//! top of Google Gemini. It covers the orchestration layer such an app
//! needs and nothing else: turning caller intents into well-formed model
//! calls, keeping conversational state across turns, and moving image
//! bytes in and out of the base64 encodings the API requires.
//!
//! The crate provides:
//!
//! * **Recipe chat**: [`RecipeGateway::open_conversation`] returns a
//!   [`ChatSession`] steered by a chef persona, with an append-only
//!   transcript in display order and one-turn-at-a-time ordering.
//! * **Image-to-recipe**: [`RecipeGateway::describe_image`] analyzes a
//!   photo of a dish against an instruction and returns markdown-flavored
//!   recipe text, which [`markdown::classify_lines`] can turn into a
//!   tagged line sequence for rendering.
//! * **AI image editing**: [`RecipeGateway::transform_image`] asks the
//!   model for a new image guided by an instruction; a reply with no image
//!   part is the distinct [`GemichefError::NoImageProduced`].
//! * **Capture plumbing**: [`capture`] funnels file-picker selections and
//!   live camera snapshots (behind the [`CameraDevice`] trait, with
//!   guaranteed track teardown) into [`ImagePayload`] values built by
//!   [`media`].
//!
//! ## Getting started
//!
//! ```rust,no_run
//! use gemichef::{prompts, RecipeGateway};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gemichef::GemichefError> {
//!     gemichef::init_logger();
//!
//!     // GEMINI_API_KEY must be set; a missing key is fatal at startup.
//!     let gateway = RecipeGateway::from_env()?;
//!
//!     let photo = gemichef::media::encode_file(&PathBuf::from("dish.jpg")).await?;
//!     let recipe = gateway
//!         .describe_image(&photo, prompts::IMAGE_RECIPE_INSTRUCTION)
//!         .await?;
//!     println!("{}", recipe);
//!     Ok(())
//! }
//! ```
//!
//! All failures reach callers as [`GemichefError`] variants meant for
//! inline rendering; nothing retries automatically and nothing panics at
//! runtime.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// Applications embedding gemichef opt in to `RUST_LOG` driven
/// diagnostics without having to wire a logging backend themselves.
///
/// ```rust
/// gemichef::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `gemichef` module.
pub mod gemichef;

// Re-exporting key items for easier external access.
pub use crate::gemichef::capture::{self, CameraDevice, CameraState, CameraStream, MediaStream};
pub use crate::gemichef::catalog::{self, Recipe};
pub use crate::gemichef::chat_session::ChatSession;
pub use crate::gemichef::clients;
pub use crate::gemichef::config::GemichefConfig;
pub use crate::gemichef::error::{GemichefError, Result};
pub use crate::gemichef::markdown;
pub use crate::gemichef::media::{self, ImagePayload};
pub use crate::gemichef::model_client::{Message, ModelClient, Role};
pub use crate::gemichef::prompts;
pub use crate::gemichef::recipe_gateway::RecipeGateway;
