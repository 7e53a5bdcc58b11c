use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find, locate and score words traced through adjacent tiles of a square letter board."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of threads used when scoring words.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every scorable word on the board along with the total score
    Words(GameArgs),
    /// Print the board path of each given word
    Locate(LocateArgs),
    /// Type words at a prompt and have them checked and scored
    Play(GameArgs),
}

/// Where the board and lexicon come from
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Word list, one word per line
    #[arg(short, long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// JSON board file (flat row-major list of tiles, or a list of rows)
    #[arg(short, long, value_name = "PATH", conflicts_with = "random")]
    pub board: Option<PathBuf>,

    /// Play on a random board of the given side length
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random so the same board can be dealt again
    #[arg(long, value_name = "SEED", requires = "random")]
    pub seed: Option<u64>,

    /// Minimum number of characters a word needs to score
    #[arg(short, long, value_name = "LEN")]
    pub min_length: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Words to look for
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_words_with_overrides() {
        let cli = Cli::try_parse_from([
            "wordsearch", "-vv", "words", "--lexicon", "w.txt", "--random", "5", "--seed", "9",
            "-m", "4",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Words(args) => {
                assert_eq!(args.lexicon, Some(PathBuf::from("w.txt")));
                assert_eq!(args.random, Some(5));
                assert_eq!(args.seed, Some(9));
                assert_eq!(args.min_length, Some(4));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn board_and_random_conflict() {
        let result = Cli::try_parse_from([
            "wordsearch", "play", "--board", "b.json", "--random", "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn locate_needs_words() {
        assert!(Cli::try_parse_from(["wordsearch", "locate"]).is_err());
        let cli = Cli::try_parse_from(["wordsearch", "locate", "ale", "cap"]).unwrap();
        match cli.command {
            Commands::Locate(args) => assert_eq!(args.words, vec!["ale", "cap"]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
