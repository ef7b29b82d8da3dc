//! Best-effort byte decoding to UTF-8 text.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Decoded text together with the encoding it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static str,
}

/// Decodes raw bytes into UTF-8 text.
///
/// - A UTF-8, UTF-16LE or UTF-16BE byte order mark selects that encoding,
///   and the mark itself is dropped.
/// - Otherwise valid UTF-8 is taken as-is.
/// - Anything else is read as Windows-1252, which maps every byte and so
///   never fails.
///
/// ```
/// use csvplate_input::decode_text;
///
/// assert_eq!(decode_text(b"caf\xc3\xa9").text, "café");
/// assert_eq!(decode_text(b"caf\xe9").text, "café");
/// ```
pub fn decode_text(bytes: &[u8]) -> Decoded {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Decoded {
            text: text.into_owned(),
            encoding: encoding.name(),
        };
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Decoded {
            text: text.to_string(),
            encoding: UTF_8.name(),
        },
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            Decoded {
                text: text.into_owned(),
                encoding: WINDOWS_1252.name(),
            }
        }
    }
}
