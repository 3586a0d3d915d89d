//! Separator-based path decomposition
//!
//! Candidates are split on a single separator character rather than through
//! `std::path::Component`, so that empty leading segments (the root on Unix)
//! and drive prefixes (`C:` on Windows) count as segments of their own.

/// Ordered component names of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
    separator: char,
}

impl<'a> PathSegments<'a> {
    pub fn split(path: &'a str, separator: char) -> Self {
        Self {
            segments: path.split(separator).collect(),
            separator,
        }
    }

    pub fn pop(&mut self) -> Option<&'a str> {
        self.segments.pop()
    }

    pub fn push(&mut self, segment: &'a str) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn join(&self) -> String {
        let mut buf = [0u8; 4];
        self.segments.join(self.separator.encode_utf8(&mut buf))
    }
}
