//! Word search over a square board of letter tiles.
//!
//! A [`WordSearchGame`] pairs a [`Board`] with a [`Lexicon`] and answers
//! three questions: which lexicon words can be traced on the board, where a
//! given word sits on the board, and how many points a set of words earns.
//!
//! ```
//! # use wordsearch::{Lexicon, WordSearchGame, WordSearchError};
//! let game = WordSearchGame::new().with_lexicon(Lexicon::from_words(["ale", "cap"])?);
//! let words = game.all_scorable_words(3)?;
//! assert_eq!(words.len(), 2);
//! assert_eq!(game.locate("ale")?, vec![4, 5, 0]);
//! assert_eq!(game.score(&words, 3)?, 2);
//! # Ok::<(), WordSearchError>(())
//! ```
pub mod board;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod search;

pub use crate::board::{Board, Position};
pub use crate::config::Config;
pub use crate::error::{Result, WordSearchError};
pub use crate::lexicon::Lexicon;
pub use crate::search::{CancelToken, WordSearchGame};
