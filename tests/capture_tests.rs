use async_trait::async_trait;
use gemichef::capture::{self, CameraDevice, CameraState, CameraStream, MediaStream};
use gemichef::media::ImagePayload;
use gemichef::GemichefError;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const FRAME: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 4, 5, 6];

struct FakeStream {
    stops: Arc<AtomicUsize>,
    fail_snapshot: bool,
}

impl MediaStream for FakeStream {
    fn snapshot(&mut self) -> gemichef::Result<Vec<u8>> {
        if self.fail_snapshot {
            Err(GemichefError::DeviceAccess("frame grab failed".to_string()))
        } else {
            Ok(FRAME.to_vec())
        }
    }

    fn stop_tracks(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

struct FakeCamera {
    stops: Arc<AtomicUsize>,
    deny: bool,
    fail_snapshot: bool,
    opened: AtomicUsize,
}

impl FakeCamera {
    fn new() -> Self {
        FakeCamera {
            stops: Arc::new(AtomicUsize::new(0)),
            deny: false,
            fail_snapshot: false,
            opened: AtomicUsize::new(0),
        }
    }

    fn denying() -> Self {
        let mut camera = FakeCamera::new();
        camera.deny = true;
        camera
    }

    fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraDevice for FakeCamera {
    async fn open_stream(&self) -> gemichef::Result<Box<dyn MediaStream>> {
        if self.deny {
            return Err(GemichefError::DeviceAccess(
                "Could not access the camera. Please check permissions and try again.".to_string(),
            ));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeStream {
            stops: self.stops.clone(),
            fail_snapshot: self.fail_snapshot,
        }))
    }
}

#[tokio::test]
async fn capture_stops_tracks_exactly_once() {
    let camera = FakeCamera::new();
    let stream = CameraStream::open(&camera).await.unwrap();
    assert!(stream.is_streaming());
    assert_eq!(stream.state(), CameraState::Streaming);

    let payload = stream.capture().unwrap();
    assert_eq!(payload.mime_type, capture::CAPTURE_MIME);
    assert_eq!(payload.decode().unwrap(), FRAME.to_vec());

    // capture consumed the stream; the guard's drop must not stop again.
    assert_eq!(camera.stop_count(), 1);
}

#[tokio::test]
async fn cancel_stops_tracks_exactly_once() {
    let camera = FakeCamera::new();
    let stream = CameraStream::open(&camera).await.unwrap();
    stream.cancel();
    assert_eq!(camera.stop_count(), 1);
}

#[tokio::test]
async fn dropping_a_live_stream_stops_tracks() {
    let camera = FakeCamera::new();
    {
        let _stream = CameraStream::open(&camera).await.unwrap();
        // owning screen goes away without capturing
    }
    assert_eq!(camera.stop_count(), 1);
}

#[tokio::test]
async fn failed_snapshot_still_tears_down_the_stream() {
    let mut camera = FakeCamera::new();
    camera.fail_snapshot = true;
    let stream = CameraStream::open(&camera).await.unwrap();

    match stream.capture() {
        Err(GemichefError::DeviceAccess(_)) => {}
        other => panic!("expected DeviceAccess, got {:?}", other),
    }
    assert_eq!(camera.stop_count(), 1);
}

#[tokio::test]
async fn denied_permission_surfaces_device_access_and_leaves_nothing_open() {
    let camera = FakeCamera::denying();

    match CameraStream::open(&camera).await {
        Err(GemichefError::DeviceAccess(message)) => {
            assert!(message.contains("camera"));
        }
        Ok(_) => panic!("expected DeviceAccess error"),
        Err(other) => panic!("expected DeviceAccess, got {:?}", other),
    }

    assert_eq!(camera.opened.load(Ordering::SeqCst), 0);
    assert_eq!(camera.stop_count(), 0);
}

#[tokio::test]
async fn file_picker_with_no_selection_is_a_noop() {
    let selection: Vec<PathBuf> = Vec::new();
    assert_eq!(capture::from_file_picker(&selection).await.unwrap(), None);
}

#[tokio::test]
async fn file_picker_encodes_the_first_selected_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dish.png");
    let bytes: Vec<u8> = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]
        .iter()
        .chain([7u8, 8, 9].iter())
        .copied()
        .collect();
    tokio::fs::write(&path, &bytes).await.unwrap();

    let payload: ImagePayload = capture::from_file_picker(&[path])
        .await
        .unwrap()
        .expect("one file selected");
    assert_eq!(payload.mime_type, "image/png");
    assert_eq!(payload.decode().unwrap(), bytes);
}
