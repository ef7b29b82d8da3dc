//! Content resolution for designators.

use std::sync::Arc;

use crate::decode::decode_text;
use crate::designator::Designator;
use crate::env::{RealStdin, StdinReader};
use crate::InputError;

/// Turns a [`Designator`] into decoded text.
///
/// Stdin and file contents go through [`decode_text`]; literal content is
/// already text and is returned unchanged.
///
/// # Testing
///
/// Use [`ContentResolver::with_reader`] to inject a mock stdin:
///
/// ```
/// use csvplate_input::{ContentResolver, Designator, MockStdin};
///
/// let resolver = ContentResolver::with_reader(MockStdin::piped("{{ Name }}"));
/// assert_eq!(resolver.resolve(&Designator::Stdin).unwrap(), "{{ Name }}");
/// ```
#[derive(Clone)]
pub struct ContentResolver<R: StdinReader = RealStdin> {
    reader: Arc<R>,
}

impl ContentResolver<RealStdin> {
    /// Create a resolver that reads the real process stdin.
    pub fn new() -> Self {
        Self {
            reader: Arc::new(RealStdin),
        }
    }
}

impl Default for ContentResolver<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> ContentResolver<R> {
    /// Create a resolver with a custom stdin reader.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
        }
    }

    /// Returns the fully decoded content named by `designator`.
    pub fn resolve(&self, designator: &Designator) -> Result<String, InputError> {
        let bytes = match designator {
            Designator::Literal(content) => return Ok(content.clone()),
            Designator::Stdin => {
                if self.reader.is_terminal() {
                    tracing::warn!("reading from terminal stdin; finish input with end-of-file");
                }
                self.reader
                    .read_to_end()
                    .map_err(InputError::StdinFailed)?
            }
            Designator::Path(path) => {
                std::fs::read(path).map_err(|err| InputError::unavailable(path, err))?
            }
        };

        let decoded = decode_text(&bytes);
        tracing::debug!(
            source = %designator,
            bytes = bytes.len(),
            encoding = decoded.encoding,
            "decoded content"
        );
        Ok(decoded.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockStdin;
    use std::io;

    #[test]
    fn literal_is_returned_verbatim() {
        let resolver = ContentResolver::with_reader(MockStdin::terminal());
        let text = resolver
            .resolve(&Designator::Literal("caf\u{e9} {{ x }}".into()))
            .unwrap();
        assert_eq!(text, "café {{ x }}");
    }

    #[test]
    fn stdin_bytes_are_decoded() {
        let resolver = ContentResolver::with_reader(MockStdin::piped_bytes(b"K\xf6ln".to_vec()));
        assert_eq!(resolver.resolve(&Designator::Stdin).unwrap(), "Köln");
    }

    #[test]
    fn stdin_failure_is_reported() {
        let resolver = ContentResolver::with_reader(MockStdin::failing(io::ErrorKind::Other));
        let err = resolver.resolve(&Designator::Stdin).unwrap_err();
        assert!(matches!(err, InputError::StdinFailed(_)));
    }

    #[test]
    fn file_content_is_read_and_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFHello {{ Name }}\n").unwrap();

        let resolver = ContentResolver::with_reader(MockStdin::terminal());
        let text = resolver.resolve(&Designator::Path(path)).unwrap();
        assert_eq!(text, "Hello {{ Name }}\n");
    }

    #[test]
    fn unreadable_path_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ContentResolver::with_reader(MockStdin::terminal());

        // A directory exists but cannot be read as a file.
        let err = resolver
            .resolve(&Designator::Path(dir.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, InputError::SourceUnavailable { .. }));
    }
}
