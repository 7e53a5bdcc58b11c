use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array2;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, WordSearchError};

pub mod generator;
pub mod position;

pub use self::position::{neighbors, Position};

const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

/// Board files may list the tiles flat in row-major order or as nested rows
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBoard {
    Flat(Vec<String>),
    Rows(Vec<Vec<String>>),
}

/// Square grid of tiles. A tile holds one or more uppercase characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Array2<String>,
}

impl Board {
    /// Builds a board from `N²` tiles given in row-major order. Tiles are
    /// uppercased but otherwise kept exactly as given. An empty list gives a
    /// 0x0 board. Fails without building anything if the count is not a
    /// perfect square or a tile is empty.
    pub fn from_tiles<I, S>(tiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles = tiles
            .into_iter()
            .map(|t| t.as_ref().to_uppercase())
            .collect::<Vec<_>>();

        let size = exact_sqrt(tiles.len()).ok_or_else(|| {
            WordSearchError::invalid(format!(
                "{} tiles cannot form a square board",
                tiles.len()
            ))
        })?;
        if let Some(i) = tiles.iter().position(|t| t.is_empty()) {
            return Err(WordSearchError::invalid(format!("tile {} is empty", i)));
        }

        let tiles = Array2::from_shape_vec((size, size), tiles)
            .map_err(|e| WordSearchError::invalid(e.to_string()))?;
        Ok(Self { tiles })
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        match serde_json::from_str::<RawBoard>(data)? {
            RawBoard::Flat(tiles) => Self::from_tiles(tiles),
            RawBoard::Rows(rows) => {
                let size = rows.len();
                if rows.iter().any(|r| r.len() != size) {
                    return Err(WordSearchError::invalid(
                        "every board row must have as many tiles as there are rows",
                    ));
                }
                Self::from_tiles(rows.into_iter().flatten())
            }
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut data = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut data))
            .map_err(|source| WordSearchError::InvalidSource {
                path: Some(path.to_path_buf()),
                source,
            })?;
        let board = Self::from_json_str(&data)?;
        debug!(path = %path.display(), size = board.size(), "loaded board");
        Ok(board)
    }

    /// Side length N of the board
    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[[pos.row, pos.col]]
    }

    pub fn to_index(&self, pos: Position) -> usize {
        pos.as_index(self.size())
    }

    /// Position of a row-major index, if it lies on the board
    pub fn position(&self, index: usize) -> Option<Position> {
        let size = self.size();
        if index < size * size {
            Some(Position::from_index(index, size))
        } else {
            None
        }
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size * size).map(move |i| Position::from_index(i, size))
    }

    /// Human readable dump, one row per line
    pub fn render(&self) -> String {
        let width = self.tiles.iter().map(|t| t.chars().count()).max().unwrap_or(1);
        let mut out = String::new();
        for row in self.tiles.rows() {
            let line = row
                .iter()
                .map(|t| format!("{:<width$}", t, width = width))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tiles: Array2::from_shape_fn((4, 4), |(r, c)| DEFAULT_TILES[r * 4 + c].to_string()),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        self.tile(index)
    }
}

/// Side length of a square with `len` cells, if there is one
fn exact_sqrt(len: usize) -> Option<usize> {
    let mut root = (len as f64).sqrt() as usize;
    while root * root > len {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= len {
        root += 1;
    }
    (root * root == len).then_some(root)
}
