//! Data-URL encoding for the payment QR image.
//!
//! The admin settings page lets an administrator pick a QR image file;
//! the file is embedded into the payment details as a
//! `data:image/...;base64,` URL so no asset hosting is needed.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;
use thiserror::Error;

/// Errors from reading or encoding a QR image file.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("Failed to read QR image '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a PNG or JPEG image.
    #[error("Unsupported QR image format for '{path}'")]
    UnsupportedFormat { path: PathBuf },
}

/// Read an image file and encode it as a data URL.
///
/// Only PNG and JPEG are accepted; the format is sniffed from the file
/// contents, not the extension.
pub fn qr_data_url(path: &Path) -> Result<String, QrError> {
    let bytes = fs::read(path).map_err(|e| QrError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mime = match image::guess_format(&bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        _ => {
            return Err(QrError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}
