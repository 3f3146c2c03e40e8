//! Orchestration of one generation request: check, call, spend.

use thiserror::Error;
use uuid::Uuid;

use crate::generate::client::{ClientError, ImageClient};
use crate::generate::gallery::Gallery;
use crate::generate::prompt::PromptSpec;
use crate::model::GeneratedImage;
use crate::notify::Notice;
use crate::session::Session;

/// Why a generation request was refused or failed.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please enter a prompt")]
    EmptyPrompt,

    #[error("Not signed in")]
    NotAuthenticated,

    /// The signed-in user cannot afford one credit.
    #[error("You don't have enough credits")]
    InsufficientCredits { balance: i64 },

    /// A previous request is still outstanding.
    #[error("A generation request is already in progress")]
    RequestInFlight,

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Drives image generation for the signed-in user.
///
/// Holds the session-local [`Gallery`] and enforces the caller contract
/// around the opaque client: refuse empty prompts, unauthenticated use,
/// insufficient balance, and overlapping submission; spend exactly one
/// credit on success (never for admins) and nothing on failure.
pub struct GenerationSession<C> {
    client: C,
    session: Session,
    gallery: Gallery,
    in_flight: bool,
}

impl<C: ImageClient> GenerationSession<C> {
    pub fn new(client: C, session: Session) -> Self {
        Self {
            client,
            session,
            gallery: Gallery::new(),
            in_flight: false,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Whether a request is currently outstanding.
    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    /// Remove an image from the session gallery.
    pub fn delete_image(&mut self, image_id: &str) {
        if self.gallery.remove(image_id) {
            self.notify_success("Image removed from session.");
        }
    }

    /// Generate one image from the given spec.
    pub async fn generate(&mut self, spec: &PromptSpec) -> Result<GeneratedImage, GenerateError> {
        if self.in_flight {
            return Err(GenerateError::RequestInFlight);
        }
        if spec.is_empty() {
            self.notify_error("Please enter a prompt.");
            return Err(GenerateError::EmptyPrompt);
        }

        let snapshot = self.session.snapshot();
        let Some(current) = snapshot.current_user.clone() else {
            return Err(GenerateError::NotAuthenticated);
        };
        if current.credits < 1 && !current.is_admin() {
            self.notify_error("You don't have enough credits.");
            return Err(GenerateError::InsufficientCredits {
                balance: current.credits,
            });
        }

        let full_prompt = spec.full_prompt();
        tracing::info!(
            user_id = %current.id,
            aspect_ratio = spec.aspect_ratio.as_str(),
            "generating image"
        );

        self.in_flight = true;
        let result = self
            .client
            .generate(&full_prompt, spec.aspect_ratio.as_str())
            .await;
        self.in_flight = false;

        let url = match result {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                self.notify_error(e.to_string());
                return Err(e.into());
            }
        };

        let image = GeneratedImage {
            id: format!("img-{}", Uuid::new_v4()),
            url,
            prompt: spec.prompt.clone(),
        };
        self.gallery.add(image.clone());

        // One credit per successful generation; no-op for admins.
        if !current.is_admin() {
            self.session.deduct_credits(&current.id, 1);
        }
        self.notify_success("Image generated successfully!");
        Ok(image)
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.session_notify(Notice::success(message));
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.session_notify(Notice::error(message));
    }

    fn session_notify(&self, notice: Notice) {
        // Notices flow through the session's notifier so the embedding
        // view sees one stream.
        self.session.notifier().notify(notice);
    }
}
