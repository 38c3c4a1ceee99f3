//! Port for the portal's legacy text encoding.
//!
//! Request builders and the response reader only ever see this trait, so the
//! surrounding logic stays encoding-agnostic and can be exercised with
//! synthetic byte sequences.

use crate::PortalResult;

/// Converts between Rust strings and the portal's on-the-wire text encoding.
pub trait TextCodec: Send + Sync {
    /// Short label for logs (e.g. `"GBK"`).
    fn name(&self) -> &'static str;

    /// Decodes a response body into text.
    ///
    /// Malformed sequences are replaced rather than rejected; the portal
    /// occasionally emits truncated multi-byte characters in table cells.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Encodes a form value for submission.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortalError::Transport`] if `text` contains a
    /// character the encoding cannot represent.
    fn encode(&self, text: &str) -> PortalResult<Vec<u8>>;
}
