//! Line input that never rejects what the player typed.
//!
//! Bytes that are not UTF-8 are replaced with U+FFFD instead of failing the
//! read, so a garbled answer is scored like any other malformed answer.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads `\n`-terminated lines, lossily decoded.
///
/// [`next_line`](Self::next_line) is cancel safe: bytes of a line that was
/// still incomplete when the future was dropped are kept and returned by the
/// next call.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its `\n` or `\r\n` terminator. `None` at end of input.
    ///
    /// A final line without a terminator is still returned.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        let read = self.reader.read_until(b'\n', &mut self.buf).await?;
        if read == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let line = decode_line(&self.buf);
        self.buf.clear();
        Ok(Some(line))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn all_lines(input: &[u8]) -> Vec<String> {
        let mut reader = LineReader::new(input);
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().await.unwrap() {
            lines.push(line);
        }
        lines
    }

    #[tokio::test]
    async fn strips_both_terminators() {
        assert_eq!(all_lines(b"9\n12\r\nq\n").await, vec!["9", "12", "q"]);
    }

    #[tokio::test]
    async fn keeps_empty_lines_and_an_unterminated_tail() {
        assert_eq!(all_lines(b"\n7").await, vec!["", "7"]);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced_not_rejected() {
        assert_eq!(
            all_lines(b"9\n\xff\n4\xfe2\n").await,
            vec!["9", "\u{FFFD}", "4\u{FFFD}2"]
        );
    }

    #[tokio::test]
    async fn empty_input_has_no_lines() {
        assert!(all_lines(b"").await.is_empty());
    }

    #[test]
    fn lone_carriage_return_inside_a_line_is_kept() {
        assert_eq!(decode_line(b"a\rb\n"), "a\rb");
    }
}
