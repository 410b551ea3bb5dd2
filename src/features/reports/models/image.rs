use thiserror::Error;
use tokio::io::AsyncRead;

use crate::shared::formatting::format_byte_size;

/// A photo picked by the reporter, not yet read
pub struct ImageUpload<R> {
    pub file_name: Option<String>,
    pub content_type: String,
    /// Size reported by the client before reading
    pub declared_size: u64,
    pub reader: R,
}

impl<'a> ImageUpload<&'a [u8]> {
    /// Upload backed by bytes already in memory (multipart bodies)
    pub fn from_bytes(file_name: Option<String>, content_type: String, bytes: &'a [u8]) -> Self {
        Self::new(file_name, content_type, bytes.len() as u64, bytes)
    }
}

impl<R: AsyncRead + Unpin + Send> ImageUpload<R> {
    pub fn new(file_name: Option<String>, content_type: String, declared_size: u64, reader: R) -> Self {
        Self {
            file_name,
            content_type,
            declared_size,
            reader,
        }
    }
}

/// Why a photo was not attached; the message is shown under the `images` field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("Please select an image file")]
    NotAnImage,

    #[error("Image must be less than {}", format_byte_size(*max_bytes))]
    TooLarge { max_bytes: usize },

    #[error("Failed to process image")]
    Unreadable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message_follows_limit() {
        let default = ImageRejection::TooLarge {
            max_bytes: 10 * 1024 * 1024,
        };
        assert_eq!(default.to_string(), "Image must be less than 10MB");

        let small = ImageRejection::TooLarge { max_bytes: 512 * 1024 };
        assert_eq!(small.to_string(), "Image must be less than 512KB");
    }
}
