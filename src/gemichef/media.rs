//! Image payload codec.
//!
//! The Gemini API exchanges images as base64 text plus a MIME type; the
//! rest of the crate deals in [`ImagePayload`] values produced here. The
//! codec also sniffs formats from magic bytes and serializes edited images
//! back to disk under the fixed download name.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::gemichef::error::{GemichefError, Result};

/// File name used when an edited image is saved for download.
pub const DOWNLOAD_FILE_NAME: &str = "edited-image.png";

/// A base64-encoded image body paired with its MIME type.
///
/// The `data` field never carries a `data:` URI prefix; use
/// [`ImagePayload::data_uri`] when a renderer wants one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload {
    /// Base64-encoded image bytes, standard alphabet, no prefix.
    pub data: String,
    /// MIME type of the encoded bytes, e.g. `image/png`.
    pub mime_type: String,
}

impl ImagePayload {
    /// Encode raw image bytes into a payload.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        ImagePayload {
            data: BASE64.encode(bytes),
            mime_type: mime_type.to_string(),
        }
    }

    /// Decode the payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(self.data.as_bytes())?)
    }

    /// Render the payload as a `data:` URI for direct display.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// File extension inferred from the encoded magic bytes.
    ///
    /// Falls back to `bin` for formats the codec does not recognize.
    pub fn extension(&self) -> &'static str {
        if self.data.starts_with("iVBORw0KG") {
            "png"
        } else if self.data.starts_with("/9j/") {
            "jpg"
        } else if self.data.starts_with("UklGR") {
            "webp"
        } else if self.data.starts_with("R0lGOD") {
            "gif"
        } else {
            "bin"
        }
    }
}

/// Sniff the MIME type of raw image bytes from their magic numbers.
///
/// Recognizes the common raster formats the file picker accepts: PNG,
/// JPEG, WebP and GIF.
pub fn detect_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"GIF8") {
        Some("image/gif")
    } else {
        None
    }
}

/// Read an image file and encode it into a payload.
///
/// The full file content is read before encoding; the gateway never sees a
/// partial image. Fails on unreadable files and on formats
/// [`detect_mime`] does not recognize.
pub async fn encode_file(path: &Path) -> Result<ImagePayload> {
    let bytes = tokio::fs::read(path).await?;
    let mime_type = detect_mime(&bytes).ok_or_else(|| {
        GemichefError::InvalidInput(format!("{} is not a supported image format", path.display()))
    })?;
    Ok(ImagePayload::from_bytes(&bytes, mime_type))
}

/// Serialize a payload into `dir` under the fixed download name.
///
/// The `png` stem of [`DOWNLOAD_FILE_NAME`] is swapped for the sniffed
/// extension when the payload is not a PNG.
pub async fn save_download(payload: &ImagePayload, dir: &Path) -> Result<PathBuf> {
    let bytes = payload.decode()?;
    let path = dir.join(PathBuf::from(DOWNLOAD_FILE_NAME).with_extension(payload.extension()));
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
