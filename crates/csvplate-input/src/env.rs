//! Stdin abstraction for testability.
//!
//! Reading a source from stdin goes through [`StdinReader`], so tests can
//! simulate piped bytes (or an interactive terminal) without touching the
//! real process stdin.

use std::io::{self, IsTerminal, Read};

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Check if stdin is a terminal (TTY).
    ///
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read all bytes from stdin until end of stream.
    fn read_to_end(&self) -> io::Result<Vec<u8>>;
}

impl<R: StdinReader + ?Sized> StdinReader for &R {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        (**self).read_to_end()
    }
}

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Mock stdin reader for testing.
///
/// Allows tests to simulate both terminal and piped stdin, as well as
/// non UTF-8 payloads and read failures.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Result<Vec<u8>, io::ErrorKind>,
}

impl MockStdin {
    /// Create a mock that simulates a terminal with nothing typed.
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: Ok(Vec::new()),
        }
    }

    /// Create a mock that simulates piped text.
    pub fn piped(content: impl Into<String>) -> Self {
        Self::piped_bytes(content.into().into_bytes())
    }

    /// Create a mock that simulates piped raw bytes.
    pub fn piped_bytes(content: impl Into<Vec<u8>>) -> Self {
        Self {
            is_terminal: false,
            content: Ok(content.into()),
        }
    }

    /// Create a mock whose reads fail with the given error kind.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            is_terminal: false,
            content: Err(kind),
        }
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        match &self.content {
            Ok(bytes) => Ok(bytes.clone()),
            Err(kind) => Err(io::Error::new(*kind, "mock stdin failure")),
        }
    }
}
