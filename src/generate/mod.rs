//! Image generation: prompt composition, the opaque client boundary,
//! and the per-session gallery.
//!
//! The store never sees generated images; they live in the
//! [`Gallery`] for the lifetime of the generation session only. The one
//! asynchronous boundary of the whole crate is
//! [`ImageClient::generate`].

mod client;
mod gallery;
mod prompt;
mod session;

pub use client::{ClientError, HttpImageClient, ImageClient};
pub use gallery::Gallery;
pub use prompt::{AspectRatio, PromptSpec, StylePreset};
pub use session::{GenerateError, GenerationSession};
