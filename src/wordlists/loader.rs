//! Word list loading utilities
//!
//! Word lists come from plain text files (one word per line) or from JSON,
//! either `{"words": [...]}` or a bare array of strings.

use crate::core::Word;
use crate::error::WordListError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonWordList {
    Object { words: Vec<String> },
    Array(Vec<String>),
}

impl JsonWordList {
    fn into_words(self) -> Vec<String> {
        match self {
            Self::Object { words } | Self::Array(words) => words,
        }
    }
}

/// Load raw words from a file
///
/// Files ending in `.json` are parsed as JSON, anything else as one word per
/// line. Entries are returned as written; validation happens in
/// [`words_from_slice`] or the [`WordBank`](super::WordBank).
///
/// # Errors
///
/// Returns `WordListError` if the file cannot be read or the JSON is malformed.
///
/// # Examples
/// ```no_run
/// use wordle_round::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        parse_json(&content).map_err(|source| WordListError::Json {
            path: path.display().to_string(),
            source,
        })?
    } else {
        parse_lines(&content)
    };

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// One word per line, blank lines skipped
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `{"words": [...]}` or `[...]`
///
/// # Errors
///
/// Returns the JSON error if the document has neither shape.
pub fn parse_json(content: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str::<JsonWordList>(content).map(JsonWordList::into_words)
}

/// Convert strings to words of the given length, skipping anything else
///
/// # Examples
/// ```
/// use wordle_round::wordlists::loader::words_from_slice;
/// use wordle_round::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS, 5);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|s| match Word::new(s) {
            Ok(word) if word.len() == word_length => Some(word),
            Ok(word) => {
                tracing::debug!(%word, word_length, "skipping word of wrong length");
                None
            }
            Err(e) => {
                tracing::debug!(entry = s.as_ref(), error = %e, "skipping invalid word");
                None
            }
        })
        .collect()
}
