use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::{IntoStreamer, Set, Streamer};
use tracing::debug;

use crate::error::{Result, WordSearchError};

/// Reads the first whitespace delimited token of every line, uppercased.
/// Blank lines are skipped and anything after the first token is ignored.
fn read_word_tokens<R: BufRead>(reader: R) -> std::io::Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            words.insert(token.to_uppercase());
        }
    }
    Ok(words)
}

/// Ordered, duplicate free set of uppercase dictionary words.
///
/// Backed by an FST so membership and ceiling queries stay cheap even for
/// full sized word lists. A lexicon never changes once built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Set<Vec<u8>>,
}

impl Lexicon {
    /// Loads a lexicon from a line oriented word file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordSearchError::InvalidSource {
            path: Some(path.to_path_buf()),
            source,
        })?;
        let entries = read_word_tokens(BufReader::new(file)).map_err(|source| {
            WordSearchError::InvalidSource {
                path: Some(path.to_path_buf()),
                source,
            }
        })?;
        debug!(path = %path.display(), words = entries.len(), "loaded lexicon");
        Self::from_sorted(entries)
    }

    /// Same format as [`Lexicon::load`] but from an already opened stream
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let entries = read_word_tokens(reader).map_err(|source| WordSearchError::InvalidSource {
            path: None,
            source,
        })?;
        Self::from_sorted(entries)
    }

    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .collect::<BTreeSet<_>>();
        Self::from_sorted(entries)
    }

    fn from_sorted(entries: BTreeSet<String>) -> Result<Self> {
        let words = Set::from_iter(entries)?;
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership, ignoring case of the query
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_uppercase())
    }

    /// Checks if any word in the lexicon starts with `prefix`.
    ///
    /// Every word sharing the prefix sorts at or after the prefix itself, so
    /// only the smallest word >= prefix has to be inspected.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_uppercase();
        self.ceiling(&prefix)
            .map(|w| w.starts_with(prefix.as_bytes()))
            .unwrap_or(false)
    }

    /// Smallest word that is lexicographically >= `key`
    fn ceiling(&self, key: &str) -> Option<Vec<u8>> {
        let mut stream = self.words.range().ge(key).into_stream();
        stream.next().map(|w| w.to_vec())
    }

    /// All words in ascending order
    pub fn words(&self) -> Result<Vec<String>> {
        Ok(self.words.stream().into_strs()?)
    }
}
