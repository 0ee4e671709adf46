//! Whole-file rewrite buffering.
//!
//! Every mutating operation builds the complete replacement file image in
//! memory first; only a fully constructed image is handed to the accessor
//! for persistence. Nothing is written while the source file is still being
//! scanned.

/// Accumulates the replacement file image line by line.
#[derive(Debug, Default)]
pub struct RewriteBuffer {
    image: String,
}

impl RewriteBuffer {
    pub fn new() -> Self {
        RewriteBuffer::default()
    }

    /// Append a line (or a multi-line block); a terminating newline is added.
    pub fn push(&mut self, line: &str) {
        self.image.push_str(line);
        self.image.push('\n');
    }

    /// The full image built so far.
    pub fn contents(&self) -> &str {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_terminates_lines() {
        let mut buf = RewriteBuffer::new();
        buf.push("one");
        buf.push("two");
        assert_eq!(buf.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_push_multi_line_block() {
        let mut buf = RewriteBuffer::new();
        buf.push("first\nsecond");
        assert_eq!(buf.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(RewriteBuffer::new().contents(), "");
    }
}
