//! GBK implementation of [`TextCodec`].

use encoding_rs::GBK;
use portal::{PortalError, PortalResult, TextCodec};
use tracing::warn;

/// Transcodes between UTF-8 and GBK, the encoding the portal serves and accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GbkCodec;

impl TextCodec for GbkCodec {
    fn name(&self) -> &'static str {
        "GBK"
    }

    fn decode(&self, bytes: &[u8]) -> String {
        // The portal never sends a BOM; a leading EF BB BF is content.
        let (text, had_errors) = GBK.decode_without_bom_handling(bytes);
        if had_errors {
            warn!(bytes = bytes.len(), "Malformed GBK sequence replaced while decoding page");
        }
        text.into_owned()
    }

    fn encode(&self, text: &str) -> PortalResult<Vec<u8>> {
        let (bytes, _, unmappable) = GBK.encode(text);
        if unmappable {
            return Err(PortalError::transport(
                "form value contains characters not representable in GBK",
            ));
        }
        Ok(bytes.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_labels() {
        let codec = GbkCodec;
        assert_eq!(codec.encode("学生").unwrap(), vec![0xD1, 0xA7, 0xC9, 0xFA]);
        assert_eq!(codec.encode("列表").unwrap(), vec![0xC1, 0xD0, 0xB1, 0xED]);
    }

    #[test]
    fn ascii_passes_through_unchanged() {
        let codec = GbkCodec;
        assert_eq!(codec.encode("2021-2022").unwrap(), b"2021-2022".to_vec());
        assert_eq!(codec.decode(b"<html></html>"), "<html></html>");
    }

    #[test]
    fn decodes_gbk_markup() {
        let codec = GbkCodec;
        let bytes = [b'<', b'p', b'>', 0xD1, 0xA7, 0xC9, 0xFA, b'<', b'/', b'p', b'>'];
        assert_eq!(codec.decode(&bytes), "<p>学生</p>");
    }

    #[test]
    fn truncated_sequence_is_replaced() {
        let codec = GbkCodec;
        assert_eq!(codec.decode(&[b'a', 0xD1]), "a\u{FFFD}");
    }

    #[test]
    fn unmappable_character_is_a_transport_error() {
        let err = GbkCodec.encode("score 😀").unwrap_err();
        assert!(err.is_transport());
    }
}
