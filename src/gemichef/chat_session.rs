//! The `chat_session` module manages a conversational session with the
//! model: a system instruction fixed at creation and an append-only
//! transcript in display order.
//!
//! **Key guarantees:**
//! - **One turn at a time**: `send_turn` takes `&mut self`, so a second
//!   turn cannot start before the first resolves.
//! - **Failed turns are not delivered**: the transcript is only updated
//!   after a successful reply, so a caller can retry the same or edited
//!   text with no cleanup.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use gemichef::RecipeGateway;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gemichef::GemichefError> {
//!     let gateway = RecipeGateway::from_env()?;
//!     let mut session = gateway.open_conversation();
//!
//!     let reply = session.send_turn("How do I make pancakes?").await?;
//!     println!("Chef: {}", reply.text);
//!
//!     // The transcript holds both turns in display order.
//!     assert_eq!(session.transcript().len(), 2);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use log::error;

// src/gemichef/chat_session.rs
use crate::gemichef::error::{GemichefError, Result};
use crate::gemichef::model_client::{Message, ModelClient};

/// Message surfaced to the user when a turn fails in transit.
pub const TURN_FAILED_MESSAGE: &str = "Sorry, I had trouble connecting. Please try again.";

/// A stateful conversation with the model.
///
/// The remote API is stateless at the HTTP level, so the session replays
/// its transcript on every turn; the transcript doubles as the ordered
/// message list an application renders. Sessions are created once per chat
/// screen and dropped with it, never persisted.
pub struct ChatSession {
    client: Arc<dyn ModelClient>,
    system_instruction: String,
    transcript: Vec<Message>,
}

impl ChatSession {
    /// Create a session with the given steering instruction.
    ///
    /// No network call happens here; the session accepts turns
    /// immediately. A canned opening line for display (not part of the
    /// replayed history) lives at [`crate::prompts::CHAT_GREETING`].
    pub fn new(client: Arc<dyn ModelClient>, system_instruction: String) -> Self {
        ChatSession {
            client,
            system_instruction,
            transcript: Vec::new(),
        }
    }

    /// Send one user turn and return the model's reply.
    ///
    /// Empty input is rejected locally with
    /// [`GemichefError::InvalidInput`] before any network call. Transport
    /// and remote failures come back as [`GemichefError::Conversation`]
    /// with a user-presentable message; in that case the turn was not
    /// delivered and the transcript is unchanged.
    pub async fn send_turn(&mut self, text: &str) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GemichefError::InvalidInput(
                "Please enter a message.".to_string(),
            ));
        }

        let user_turn = Message::user(text);

        // Replay the transcript with the pending turn appended; the
        // transcript itself is only touched once the reply is in.
        let mut outgoing = self.transcript.clone();
        outgoing.push(user_turn.clone());

        match self
            .client
            .send_chat(&self.system_instruction, &outgoing)
            .await
        {
            Ok(reply_text) => {
                let reply = Message::model(reply_text);
                self.transcript.push(user_turn);
                self.transcript.push(reply.clone());
                Ok(reply)
            }
            Err(err) => {
                error!("ChatSession::send_turn failed: {}", err);
                Err(GemichefError::Conversation(TURN_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// All delivered messages, in display order.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// The steering instruction this session was created with.
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}
