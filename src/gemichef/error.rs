use thiserror::Error;

/// Everything that can go wrong in gemichef.
///
/// The first five variants are the user-facing classes an application is
/// expected to match on and render inline; the remaining variants are
/// plumbing that the gateway and session map into those classes before they
/// reach a caller.
#[derive(Error, Debug)]
pub enum GemichefError {
    /// Required credential or setting missing at startup. Fatal: callers
    /// should refuse to serve any screen.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Camera permission denied or no camera available. Recoverable;
    /// never retried automatically.
    #[error("{0}")]
    DeviceAccess(String),

    /// A chat turn failed to reach the model or the model failed to reply.
    /// The failed turn is not delivered; the caller may retry it.
    #[error("{0}")]
    Conversation(String),

    /// A single-shot image analysis or edit request failed in transit.
    #[error("{0}")]
    Analysis(String),

    /// The edit call succeeded but the response carried no image part.
    /// Distinct from a transport failure so callers can suggest rephrasing
    /// the instruction rather than retrying as-is.
    #[error("The model did not return an image. Try rephrasing your instruction.")]
    NoImageProduced,

    /// Rejected locally before any remote call was attempted.
    #[error("{0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The remote call completed but the response was an error payload or
    /// an unexpected shape.
    #[error("Gemini API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GemichefError>;
