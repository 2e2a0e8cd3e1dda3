use async_trait::async_trait;
use gemichef::markdown::{self, RecipeLine};
use gemichef::media::ImagePayload;
use gemichef::{GemichefError, Message, ModelClient, RecipeGateway};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const RECIPE_MARKDOWN: &str = "### Spaghetti Carbonara\n\nA Roman classic.\n\n**Ingredients:**\n* 200g spaghetti\n\n**Instructions:**\n1. Boil the pasta.";

enum EditOutcome {
    Image,
    NoImage,
    Transport,
}

// Mock client for the two single-shot operations.
struct MockClient {
    analyze_outcome: std::result::Result<String, String>,
    edit_outcome: EditOutcome,
    calls: AtomicUsize,
}

impl MockClient {
    fn analyzing(reply: &str) -> Self {
        MockClient {
            analyze_outcome: Ok(reply.to_string()),
            edit_outcome: EditOutcome::Image,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing_analysis(message: &str) -> Self {
        MockClient {
            analyze_outcome: Err(message.to_string()),
            edit_outcome: EditOutcome::Image,
            calls: AtomicUsize::new(0),
        }
    }

    fn editing(outcome: EditOutcome) -> Self {
        MockClient {
            analyze_outcome: Ok(String::new()),
            edit_outcome: outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn send_chat(
        &self,
        _system_instruction: &str,
        _history: &[Message],
    ) -> gemichef::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("chat reply".to_string())
    }

    async fn analyze_image(
        &self,
        _image: &ImagePayload,
        _instruction: &str,
    ) -> gemichef::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.analyze_outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GemichefError::Api(message.clone())),
        }
    }

    async fn edit_image(
        &self,
        _image: &ImagePayload,
        _instruction: &str,
    ) -> gemichef::Result<ImagePayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.edit_outcome {
            EditOutcome::Image => Ok(ImagePayload::from_bytes(
                &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 9, 9],
                "image/png",
            )),
            EditOutcome::NoImage => Err(GemichefError::NoImageProduced),
            EditOutcome::Transport => Err(GemichefError::Api("502 upstream".to_string())),
        }
    }

    fn chat_model(&self) -> &str {
        "mock-chat"
    }

    fn image_model(&self) -> &str {
        "mock-image"
    }
}

fn sample_photo() -> ImagePayload {
    ImagePayload::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3], "image/jpeg")
}

#[tokio::test]
async fn describe_image_returns_markdown_with_a_heading() {
    let client = Arc::new(MockClient::analyzing(RECIPE_MARKDOWN));
    let gateway = RecipeGateway::new(client.clone());

    let text = gateway
        .describe_image(&sample_photo(), "Identify this dish and give a recipe.")
        .await
        .unwrap();

    assert!(!text.is_empty());
    let has_heading = markdown::classify_lines(&text)
        .iter()
        .any(|line| matches!(line, RecipeLine::Heading(_)));
    assert!(has_heading, "expected at least one heading-like line");
}

#[tokio::test]
async fn describe_image_maps_transport_failures_to_analysis() {
    let client = Arc::new(MockClient::failing_analysis("connection reset"));
    let gateway = RecipeGateway::new(client.clone());

    match gateway.describe_image(&sample_photo(), "recipe please").await {
        Err(GemichefError::Analysis(message)) => {
            assert_eq!(message, "Failed to get recipe from the image. Please try again.")
        }
        other => panic!("expected Analysis error, got {:?}", other),
    }
}

#[tokio::test]
async fn incomplete_requests_are_rejected_before_any_network_call() {
    let client = Arc::new(MockClient::analyzing(RECIPE_MARKDOWN));
    let gateway = RecipeGateway::new(client.clone());

    let empty_image = ImagePayload {
        data: String::new(),
        mime_type: "image/png".to_string(),
    };

    for result in &[
        gateway.describe_image(&empty_image, "recipe").await.err(),
        gateway.describe_image(&sample_photo(), "   ").await.err(),
        gateway.transform_image(&empty_image, "grayscale").await.err(),
        gateway.transform_image(&sample_photo(), "").await.err(),
    ] {
        match result {
            Some(GemichefError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn transform_image_returns_a_new_payload() {
    let client = Arc::new(MockClient::editing(EditOutcome::Image));
    let gateway = RecipeGateway::new(client.clone());

    let input = sample_photo();
    let edited = gateway
        .transform_image(&input, "make it black and white")
        .await
        .unwrap();

    assert_ne!(edited.data, input.data);
    assert_eq!(edited.mime_type, "image/png");
    // The input payload is untouched.
    assert_eq!(input, sample_photo());
}

#[tokio::test]
async fn transform_image_distinguishes_an_imageless_reply() {
    let client = Arc::new(MockClient::editing(EditOutcome::NoImage));
    let gateway = RecipeGateway::new(client.clone());

    match gateway.transform_image(&sample_photo(), "grayscale").await {
        Err(GemichefError::NoImageProduced) => {}
        other => panic!("expected NoImageProduced, got {:?}", other),
    }
}

#[tokio::test]
async fn transform_image_maps_transport_failures_to_analysis() {
    let client = Arc::new(MockClient::editing(EditOutcome::Transport));
    let gateway = RecipeGateway::new(client.clone());

    match gateway.transform_image(&sample_photo(), "grayscale").await {
        Err(GemichefError::Analysis(message)) => {
            assert_eq!(message, "Failed to edit the image. Please try again.")
        }
        other => panic!("expected Analysis error, got {:?}", other),
    }
}

#[tokio::test]
async fn open_conversation_uses_the_chef_persona() {
    let client = Arc::new(MockClient::analyzing(""));
    let gateway = RecipeGateway::new(client.clone());

    let session = gateway.open_conversation();
    assert_eq!(
        session.system_instruction(),
        gemichef::prompts::CHEF_SYSTEM_INSTRUCTION
    );
    // Ready immediately, no network call.
    assert_eq!(client.call_count(), 0);
    assert!(session.transcript().is_empty());
}
