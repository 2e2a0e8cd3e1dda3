use async_trait::async_trait;

use crate::gemichef::error::Result;
use crate::gemichef::media::ImagePayload;

/// A ModelClient is the single seam between local state and the remote
/// model. It exposes the three request shapes the gateway needs and nothing
/// else; it keeps no conversation state, for that we use a ChatSession
/// which owns the transcript and replays it through a ModelClient.

/// Speaker of a chat message, matching the Gemini turn roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// A message typed by the application user.
    User,
    /// A reply produced by the model.
    Model,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message of a conversation transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Message {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Interface to a remote generative model.
///
/// Implementations talk to one vendor; callers only see this trait, so
/// tests can substitute an in-memory fake.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a full conversation (system instruction plus ordered history,
    /// newest user turn last) and return the model's reply text.
    async fn send_chat(&self, system_instruction: &str, history: &[Message]) -> Result<String>;

    /// Single-shot: analyze one image against one instruction and return
    /// the model's free text.
    async fn analyze_image(&self, image: &ImagePayload, instruction: &str) -> Result<String>;

    /// Single-shot: ask the model for a new image guided by the
    /// instruction. Returns the first image of the response; a response
    /// with no image part is [`GemichefError::NoImageProduced`].
    ///
    /// [`GemichefError::NoImageProduced`]: crate::GemichefError::NoImageProduced
    async fn edit_image(&self, image: &ImagePayload, instruction: &str) -> Result<ImagePayload>;

    /// Name of the model answering chat and analysis requests.
    fn chat_model(&self) -> &str;

    /// Name of the model answering edit requests.
    fn image_model(&self) -> &str;
}
