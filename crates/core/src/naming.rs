//! Image file naming convention engine.
//!
//! Stored image names are derived deterministically from the owning room id
//! and the file content, so ownership is encoded in the name itself and
//! re-uploading identical content produces the same name.

use sha2::{Digest, Sha256};

/// Hex characters of the content digest kept in the file name.
const HASH_PREFIX_LEN: usize = 16;

/// Extension used when the uploaded file name carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Derive the stored file name for an uploaded image.
///
/// Convention: `{room_id}-{sha256(content)[..16]}.{ext}`
///
/// - `room_id` is the owning room's identifier.
/// - The digest prefix makes the name stable for identical content.
/// - `ext` is taken from `original_name`, lowercased and stripped of
///   anything non-alphanumeric; falls back to `jpg`.
///
/// # Examples
///
/// ```
/// use roomly_core::naming::image_file_name;
///
/// let name = image_file_name("R1", b"bytes", "photo.PNG");
/// assert!(name.starts_with("R1-"));
/// assert!(name.ends_with(".png"));
/// ```
pub fn image_file_name(room_id: &str, content: &[u8], original_name: &str) -> String {
    let digest = Sha256::digest(content);
    let mut hash = String::with_capacity(HASH_PREFIX_LEN);
    for byte in digest.iter().take(HASH_PREFIX_LEN / 2) {
        hash.push_str(&format!("{byte:02x}"));
    }

    format!("{room_id}-{hash}.{}", extension_of(original_name))
}

/// Extract a sanitized lowercase extension from an uploaded file name.
fn extension_of(original_name: &str) -> String {
    let ext: String = match original_name.rsplit_once('.') {
        Some((_, ext)) => ext
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase(),
        None => String::new(),
    };

    if ext.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        ext
    }
}

/// Whether `file_name` is safe to resolve inside the image directory.
///
/// Rejects empty names, path separators, and parent-directory components so
/// a requested name can never escape the storage root.
pub fn is_safe_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && !file_name.contains('/')
        && !file_name.contains('\\')
        && !file_name.contains("..")
}
