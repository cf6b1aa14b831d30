//! Character statistics over a piece of text. Whitespace is never counted.

use crate::error::{Error, Result};
use crate::file_reader::read_whole_file;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct FileStats {
    histogram: HashMap<char, usize>,
}

impl FileStats {
    pub fn from_text(text: &str) -> Self {
        let mut histogram = HashMap::new();
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            *histogram.entry(c).or_insert(0) += 1;
        }
        FileStats { histogram }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let stats = Self::from_text(&read_whole_file(path.as_ref())?);
        debug!(
            path = %path.as_ref().display(),
            distinct = stats.distinct_chars(),
            "collected character stats"
        );
        Ok(stats)
    }

    /// How many times `c` appeared. Characters never seen (whitespace included) count 0.
    pub fn char_count(&self, c: char) -> usize {
        self.histogram.get(&c).copied().unwrap_or(0)
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.histogram.contains_key(&c)
    }

    /// The character seen most often. Ties go to the smallest character.
    pub fn most_popular_char(&self) -> Result<char> {
        self.histogram
            .iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
            .map(|(c, _)| *c)
            .ok_or(Error::EmptyData)
    }

    pub fn distinct_chars(&self) -> usize {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn counts_characters() {
        let stats = FileStats::from_text("abracadabra");
        assert_eq!(stats.char_count('a'), 5);
        assert_eq!(stats.char_count('b'), 2);
        assert_eq!(stats.char_count('z'), 0);
        assert_eq!(stats.distinct_chars(), 5);
    }

    #[test]
    fn ignores_whitespace() {
        let stats = FileStats::from_text("a a\ta\n \r\n");
        assert_eq!(stats.char_count('a'), 3);
        assert_eq!(stats.char_count(' '), 0);
        assert!(!stats.contains_char(' '));
        assert!(!stats.contains_char('\n'));
        assert_eq!(stats.most_popular_char().unwrap(), 'a');
    }

    #[test]
    fn most_popular_char() {
        let stats = FileStats::from_text("Hello, world! Good morning");
        assert_eq!(stats.most_popular_char().unwrap(), 'o');
    }

    #[test]
    fn most_popular_char_breaks_ties_by_smallest() {
        let stats = FileStats::from_text("ccbbaa");
        assert_eq!(stats.most_popular_char().unwrap(), 'a');
    }

    #[test]
    fn empty_stats_reject_queries() {
        for text in ["", "   \n\t "] {
            let stats = FileStats::from_text(text);
            assert!(stats.is_empty());
            assert!(matches!(stats.most_popular_char(), Err(Error::EmptyData)));
        }
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"zz y\nzzz\n").unwrap();

        let stats = FileStats::from_file(file.path()).unwrap();
        assert_eq!(stats.char_count('z'), 5);
        assert!(stats.contains_char('y'));
        assert_eq!(stats.most_popular_char().unwrap(), 'z');
    }

    #[test]
    fn from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStats::from_file(dir.path().join("nope.txt"));
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
