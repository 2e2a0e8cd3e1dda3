//! Image capture: file-picker selections and live camera snapshots, both
//! funneled into [`ImagePayload`] values.
//!
//! Camera hardware sits behind the [`CameraDevice`] trait so platform
//! integrations (and tests) can supply their own. A live acquisition is
//! owned by a [`CameraStream`] guard whose lifecycle is
//!
//! ```text
//! closed -> opening -> streaming -> (captured | cancelled | failed) -> closed
//! ```
//!
//! Opening may fail straight back to closed with a [`DeviceAccessError`];
//! once streaming, the tracks are stopped exactly once on every exit path:
//! successful capture, explicit cancel, or the guard being dropped when the
//! owning screen goes away.
//!
//! [`DeviceAccessError`]: crate::GemichefError::DeviceAccess

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::gemichef::error::{GemichefError, Result};
use crate::gemichef::media::{self, ImagePayload};

/// MIME type of captured camera frames.
pub const CAPTURE_MIME: &str = "image/jpeg";

/// A camera the adapter can ask for a live feed.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Request a live stream from the device.
    ///
    /// Denied permission or missing hardware must come back as
    /// [`GemichefError::DeviceAccess`]; implementations release any
    /// partially-acquired resources before returning the error. The
    /// adapter never retries on its own.
    async fn open_stream(&self) -> Result<Box<dyn MediaStream>>;
}

/// A live feed handed out by a [`CameraDevice`].
pub trait MediaStream: Send {
    /// Snapshot the current frame as JPEG bytes at the stream's native
    /// resolution.
    fn snapshot(&mut self) -> Result<Vec<u8>>;

    /// Stop every track of the feed. The owning [`CameraStream`] calls
    /// this exactly once.
    fn stop_tracks(&mut self);
}

/// Lifecycle states of a camera acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraState {
    Closed,
    Opening,
    Streaming,
    Captured,
    Cancelled,
    Failed,
}

/// Scoped ownership of one live camera stream.
///
/// While a `CameraStream` exists it is the exclusive owner of the feed; at
/// most one per screen. Capture and cancel consume the guard, and `Drop`
/// covers every other exit path, so the camera light never stays on after
/// the owning screen loses interest.
pub struct CameraStream {
    feed: Option<Box<dyn MediaStream>>,
    state: CameraState,
}

impl CameraStream {
    /// Ask `device` for a live stream.
    ///
    /// On failure the error is surfaced as
    /// [`GemichefError::DeviceAccess`] and no stream is left open.
    pub async fn open(device: &dyn CameraDevice) -> Result<CameraStream> {
        match device.open_stream().await {
            Ok(feed) => Ok(CameraStream {
                feed: Some(feed),
                state: CameraState::Streaming,
            }),
            Err(GemichefError::DeviceAccess(message)) => {
                Err(GemichefError::DeviceAccess(message))
            }
            Err(err) => Err(GemichefError::DeviceAccess(format!(
                "Could not access the camera. Please check permissions and try again. ({})",
                err
            ))),
        }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_streaming(&self) -> bool {
        self.state == CameraState::Streaming
    }

    /// Snapshot the current frame into a JPEG payload.
    ///
    /// Consumes the stream; the tracks are stopped whether or not the
    /// snapshot succeeds.
    pub fn capture(mut self) -> Result<ImagePayload> {
        let mut feed = match self.feed.take() {
            Some(feed) => feed,
            None => {
                return Err(GemichefError::DeviceAccess(
                    "The camera stream is no longer open.".to_string(),
                ))
            }
        };

        let frame = feed.snapshot();
        feed.stop_tracks();
        debug!("camera tracks stopped after capture");

        match frame {
            Ok(bytes) => {
                self.state = CameraState::Captured;
                Ok(ImagePayload::from_bytes(&bytes, CAPTURE_MIME))
            }
            Err(err) => {
                self.state = CameraState::Failed;
                Err(err)
            }
        }
    }

    /// Close the stream without capturing.
    pub fn cancel(mut self) {
        if let Some(mut feed) = self.feed.take() {
            feed.stop_tracks();
            debug!("camera tracks stopped on cancel");
        }
        self.state = CameraState::Cancelled;
    }
}

impl Drop for CameraStream {
    // Last-resort teardown for exit paths that never reached capture or
    // cancel, e.g. the owning screen unmounting.
    fn drop(&mut self) {
        if let Some(mut feed) = self.feed.take() {
            feed.stop_tracks();
            debug!("camera tracks stopped on drop");
        }
        self.state = CameraState::Closed;
    }
}

/// Encode the first file of a picker selection.
///
/// An empty selection is a no-op, mirroring a file-picker change event
/// that carries no files.
pub async fn from_file_picker(selection: &[PathBuf]) -> Result<Option<ImagePayload>> {
    let path = match selection.first() {
        Some(path) => path,
        None => return Ok(None),
    };
    media::encode_file(path).await.map(Some)
}
