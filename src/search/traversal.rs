use super::cancel::CancelToken;
use super::visited::VisitMask;
use crate::board::{neighbors, Board, Position};
use crate::error::{Result, WordSearchError};

/// What the traversal should do with the string spelled by the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Dead end, back out of the last tile
    Prune,
    /// Keep growing the path from the last tile
    Extend,
    /// Stop the whole search and keep the current path
    Accept,
}

/// Decides how a depth first walk over the board proceeds
pub trait PathVisitor {
    fn visit(&mut self, word: &str) -> Step;
}

/// Scratch state for one depth first search over a board.
///
/// `word` is always the concatenation of the tiles on `path`, and `visited`
/// marks exactly the cells on `path`.
pub struct Traversal<'a> {
    board: &'a Board,
    cancel: Option<&'a CancelToken>,
    visited: VisitMask,
    path: Vec<Position>,
    word: String,
}

impl<'a> Traversal<'a> {
    pub fn new(board: &'a Board, cancel: Option<&'a CancelToken>) -> Self {
        Self {
            board,
            cancel,
            visited: VisitMask::new(board.size()),
            path: Vec::with_capacity(board.size() * board.size()),
            word: String::new(),
        }
    }

    /// Path left in place by the last accepted search
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Walks every simple path starting at `start`, consulting `visitor`
    /// after each tile is added. Returns true if the visitor accepted a path,
    /// in which case [`Traversal::path`] holds it.
    pub fn search_from<V: PathVisitor>(&mut self, start: Position, visitor: &mut V) -> Result<bool> {
        self.check_cancelled()?;
        self.reset();
        self.push(start);
        let accepted = match visitor.visit(&self.word) {
            Step::Accept => true,
            Step::Extend => self.extend(visitor)?,
            Step::Prune => false,
        };
        if !accepted {
            self.pop();
        }
        Ok(accepted)
    }

    fn extend<V: PathVisitor>(&mut self, visitor: &mut V) -> Result<bool> {
        self.check_cancelled()?;
        let last = match self.path.last() {
            Some(&p) => p,
            None => return Ok(false),
        };

        for next in neighbors(last, self.board.size()) {
            if self.visited.is_marked(next) {
                continue;
            }
            self.push(next);
            let accepted = match visitor.visit(&self.word) {
                Step::Accept => true,
                Step::Extend => self.extend(visitor)?,
                Step::Prune => false,
            };
            if accepted {
                return Ok(true);
            }
            self.pop();
        }
        Ok(false)
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(token) if token.is_cancelled() => Err(WordSearchError::Cancelled),
            _ => Ok(()),
        }
    }

    fn push(&mut self, pos: Position) {
        self.visited.mark(pos);
        self.path.push(pos);
        self.word.push_str(self.board.tile(pos));
    }

    fn pop(&mut self) {
        if let Some(pos) = self.path.pop() {
            let len = self.word.len() - self.board.tile(pos).len();
            self.word.truncate(len);
            self.visited.unmark(pos);
        }
    }

    fn reset(&mut self) {
        self.visited.clear();
        self.path.clear();
        self.word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every string it sees up to a fixed length
    struct Spelled {
        max_len: usize,
        seen: Vec<String>,
    }

    impl PathVisitor for Spelled {
        fn visit(&mut self, word: &str) -> Step {
            self.seen.push(word.to_string());
            if word.len() < self.max_len {
                Step::Extend
            } else {
                Step::Prune
            }
        }
    }

    #[test]
    fn test_walks_every_simple_path() {
        let board = Board::from_tiles(["A", "B", "C", "D"]).unwrap();
        let mut traversal = Traversal::new(&board, None);
        let mut visitor = Spelled {
            max_len: 4,
            seen: Vec::new(),
        };
        let accepted = traversal
            .search_from(Position::new(0, 0), &mut visitor)
            .unwrap();
        assert!(!accepted);
        // Every pair of cells touches on a 2x2 board: 1 + 3 + 6 + 6 paths
        assert_eq!(visitor.seen.len(), 16);
        assert_eq!(&visitor.seen[..4], &["A", "AB", "ABC", "ABCD"]);
        assert!(visitor.seen.iter().all(|w| w.starts_with('A')));
        assert!(traversal.path().is_empty());
    }

    #[test]
    fn test_cancelled_search_errors() {
        let board = Board::default();
        let token = CancelToken::new();
        token.cancel();
        let mut traversal = Traversal::new(&board, Some(&token));
        let mut visitor = Spelled {
            max_len: 3,
            seen: Vec::new(),
        };
        let err = traversal
            .search_from(Position::new(0, 0), &mut visitor)
            .unwrap_err();
        assert!(matches!(err, WordSearchError::Cancelled));
    }
}
