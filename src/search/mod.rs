use std::collections::BTreeSet;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::{Board, Position};
use crate::error::{Result, WordSearchError};
use crate::lexicon::Lexicon;

pub mod cancel;
mod traversal;
pub mod visited;

pub use self::cancel::CancelToken;
use self::traversal::{PathVisitor, Step, Traversal};

/// Collects every lexicon word spelled along the way, pruning on lexicon prefixes
struct WordCollector<'a> {
    lexicon: &'a Lexicon,
    min_length: usize,
    found: BTreeSet<String>,
}

impl<'a> PathVisitor for WordCollector<'a> {
    fn visit(&mut self, word: &str) -> Step {
        if !self.lexicon.has_prefix(word) {
            return Step::Prune;
        }
        if word.chars().count() >= self.min_length && self.lexicon.contains(word) {
            self.found.insert(word.to_string());
        }
        Step::Extend
    }
}

/// Stops on the first path spelling `target` exactly
struct TargetWord<'a> {
    target: &'a str,
}

impl<'a> PathVisitor for TargetWord<'a> {
    fn visit(&mut self, word: &str) -> Step {
        if word == self.target {
            Step::Accept
        } else if self.target.starts_with(word) {
            Step::Extend
        } else {
            Step::Prune
        }
    }
}

/// Word search over one board and one lexicon.
///
/// Starts out on a built-in 4x4 board with no lexicon loaded. Every query
/// that needs the lexicon fails with [`WordSearchError::NotLoaded`] until
/// one is loaded.
#[derive(Debug, Clone, Default)]
pub struct WordSearchGame {
    board: Board,
    lexicon: Option<Lexicon>,
    cancel: Option<CancelToken>,
}

impl WordSearchGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Makes every later search check `token` and bail out once it is tripped
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Replaces the lexicon with the words in `path`. On failure the
    /// previously loaded lexicon (or lack of one) is left untouched.
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let lexicon = Lexicon::load(path)?;
        self.set_lexicon(lexicon);
        Ok(())
    }

    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        debug!(words = lexicon.len(), "lexicon replaced");
        self.lexicon = Some(lexicon);
    }

    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    pub fn is_lexicon_loaded(&self) -> bool {
        self.lexicon.is_some()
    }

    /// Replaces the board with `N²` tiles in row-major order. A rejected
    /// tile list leaves the current board as it was.
    pub fn set_board<I, S>(&mut self, tiles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let board = Board::from_tiles(tiles)?;
        self.replace_board(board);
        Ok(())
    }

    pub fn replace_board(&mut self, board: Board) {
        debug!(size = board.size(), "board replaced");
        self.board = board;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn render(&self) -> String {
        self.board.render()
    }

    fn loaded_lexicon(&self) -> Result<&Lexicon> {
        self.lexicon.as_ref().ok_or(WordSearchError::NotLoaded)
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(self.loaded_lexicon()?.contains(word))
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.loaded_lexicon()?.has_prefix(prefix))
    }

    /// Every lexicon word of at least `min_length` characters that can be
    /// spelled by a simple path of adjacent tiles.
    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        check_min_length(min_length)?;
        let lexicon = self.loaded_lexicon()?;

        let mut collector = WordCollector {
            lexicon,
            min_length,
            found: BTreeSet::new(),
        };
        let mut traversal = Traversal::new(&self.board, self.cancel.as_ref());
        for start in self.board.positions() {
            trace!(%start, tile = self.board.tile(start), "searching from");
            traversal.search_from(start, &mut collector)?;
        }
        debug!(min_length, words = collector.found.len(), "enumerated board");
        Ok(collector.found)
    }

    /// Row-major indices of the first path spelling `word`, or an empty
    /// list if the word is not on the board.
    pub fn locate(&self, word: &str) -> Result<Vec<usize>> {
        Ok(self
            .locate_positions(word)?
            .into_iter()
            .map(|p| self.board.to_index(p))
            .collect())
    }

    /// Same as [`WordSearchGame::locate`] but reports board positions.
    ///
    /// Start cells are tried in row-major order and neighbors in
    /// [`crate::board::neighbors`] order; the first complete path wins.
    pub fn locate_positions(&self, word: &str) -> Result<Vec<Position>> {
        self.loaded_lexicon()?;
        let target = word.to_uppercase();
        if target.is_empty() {
            return Ok(Vec::new());
        }

        let mut visitor = TargetWord { target: &target };
        let mut traversal = Traversal::new(&self.board, self.cancel.as_ref());
        for start in self.board.positions() {
            if traversal.search_from(start, &mut visitor)? {
                return Ok(traversal.path().to_vec());
            }
        }
        Ok(Vec::new())
    }

    /// Total points for the scorable words in `words`. A word scores one
    /// point for reaching `min_length` and one more per extra character.
    /// Words too short, missing from the lexicon or absent from the board
    /// score nothing.
    pub fn score(&self, words: &BTreeSet<String>, min_length: usize) -> Result<usize> {
        check_min_length(min_length)?;
        let lexicon = self.loaded_lexicon()?;

        words
            .par_iter()
            .map(|word| -> Result<usize> {
                let word = word.to_uppercase();
                let len = word.chars().count();
                if len < min_length || !lexicon.contains(&word) {
                    return Ok(0);
                }
                if self.locate_positions(&word)?.is_empty() {
                    return Ok(0);
                }
                Ok(len - min_length + 1)
            })
            .sum()
    }
}

fn check_min_length(min_length: usize) -> Result<()> {
    if min_length < 1 {
        return Err(WordSearchError::invalid("minimum word length must be at least 1"));
    }
    Ok(())
}
