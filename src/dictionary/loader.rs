//! Dictionary source loading
//!
//! Builds a `DictionaryIndex` from a file, any buffered reader or the word
//! list embedded at build time.

use super::embedded::WORDS;
use super::index::{DictionaryError, DictionaryIndex, LengthBounds};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one candidate word per line
///
/// Lines are decoded best-effort: invalid UTF-8 sequences become U+FFFD,
/// which makes the word unplayable rather than failing the whole source.
///
/// # Errors
///
/// Returns `DictionaryError::Read` if the underlying reader fails.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    reader
        .split(b'\n')
        .map(|line| {
            line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| DictionaryError::Read { source })
        })
        .collect()
}

impl DictionaryIndex {
    /// Load a dictionary file with the default length bounds
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Open` if the file cannot be opened and
    /// `DictionaryError::Read` if it cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_rules::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::from_path("/usr/share/dict/french").unwrap();
    /// println!("Loaded {} words", index.len());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::from_path_with_bounds(path, LengthBounds::default())
    }

    /// Load a dictionary file keeping words within `bounds`
    ///
    /// # Errors
    ///
    /// Same as [`DictionaryIndex::from_path`].
    pub fn from_path_with_bounds<P: AsRef<Path>>(
        path: P,
        bounds: LengthBounds,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        debug!("opening dictionary {}", path.display());

        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader_with_bounds(BufReader::new(file), bounds)
    }

    /// Build from a reader with the default length bounds
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Read` if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::from_reader_with_bounds(reader, LengthBounds::default())
    }

    /// Build from a reader keeping words within `bounds`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Read` if the reader fails.
    pub fn from_reader_with_bounds<R: BufRead>(
        reader: R,
        bounds: LengthBounds,
    ) -> Result<Self, DictionaryError> {
        let lines = read_lines(reader)?;
        Ok(Self::build_with_bounds(lines, bounds))
    }

    /// Build from the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::embedded_with_bounds(LengthBounds::default())
    }

    /// Build from the embedded word list keeping words within `bounds`
    #[must_use]
    pub fn embedded_with_bounds(bounds: LengthBounds) -> Self {
        Self::build_with_bounds(WORDS.iter().copied(), bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WORDS_COUNT;
    use std::io::{self, Cursor, Read};

    #[test]
    fn read_lines_splits_on_newlines() {
        let lines = read_lines(Cursor::new("table\nchaise\n\nlapin")).unwrap();
        assert_eq!(lines, vec!["table", "chaise", "", "lapin"]);
    }

    #[test]
    fn read_lines_decodes_lossily() {
        let lines = read_lines(Cursor::new(b"tab\xffe\nforet\n".to_vec())).unwrap();
        assert_eq!(lines[0], "tab\u{fffd}e");
        assert_eq!(lines[1], "foret");
    }

    #[test]
    fn from_reader_skips_invalid_lines() {
        let source = b"table\r\ntab\xC3e\nchat\n\nfor\xC3\xAAt\n".to_vec();
        let index = DictionaryIndex::from_reader(Cursor::new(source)).unwrap();
        assert!(index.exists("table"));
        assert!(index.exists("foret"));
        assert!(!index.exists("chat"));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = DictionaryIndex::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Open { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn from_reader_reports_read_failure() {
        let err = DictionaryIndex::from_reader(BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
    }

    #[test]
    fn embedded_dictionary_is_usable() {
        let index = DictionaryIndex::embedded();
        assert!(!index.is_empty());
        assert!(index.len() <= WORDS_COUNT);
        assert!(index.playable_count() > 0);
        for entry in index.entries() {
            assert!(index.bounds().contains(entry.char_len()));
        }
    }
}
