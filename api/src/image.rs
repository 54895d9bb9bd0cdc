//! Self-contained encoded images (`data:<mime>;base64,<payload>`).

use std::fmt;

use base64::{engine::general_purpose, Engine as _};

/// MIME tag used when the bytes do not identify themselves.
pub const FALLBACK_MIME: &str = "image/jpeg";

/// A data URI holding one photograph. Used both for inline previews and as
/// the transmission payload.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    uri: String,
}

impl EncodedImage {
    /// Encode raw file bytes. Returns `None` for empty input.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let mime = detect_mime(bytes);
        let payload = general_purpose::STANDARD.encode(bytes);
        Some(Self {
            uri: format!("data:{mime};base64,{payload}"),
        })
    }

    /// Wrap an existing data URI. Returns `None` for blank input.
    pub fn from_data_uri(uri: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            None
        } else {
            Some(Self { uri })
        }
    }

    /// Full data URI, suitable for an `<img src>`.
    pub fn data_uri(&self) -> &str {
        &self.uri
    }

    /// The bare base64 payload with the MIME prefix stripped.
    pub fn payload(&self) -> &str {
        match self.uri.split_once(',') {
            Some((_, payload)) => payload,
            None => &self.uri,
        }
    }

    /// MIME tag carried in the prefix, if any.
    pub fn mime_type(&self) -> Option<&str> {
        let (prefix, _) = self.uri.split_once(',')?;
        let prefix = prefix.strip_prefix("data:")?;
        let mime = prefix.split(';').next().unwrap_or(prefix);
        (!mime.is_empty()).then_some(mime)
    }
}

// Payloads run to megabytes; keep Debug output short.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime", &self.mime_type())
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

fn detect_mime(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or(FALLBACK_MIME)
}
