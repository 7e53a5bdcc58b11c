use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
#[macro_use]
extern crate text_io;

use wordsearch::board::generator;
use wordsearch::{Board, Config, Result, WordSearchError, WordSearchGame};

use crate::cli::{Cli, Commands, GameArgs};

mod cli;
mod logging;

/// Effective settings after layering command line flags over the config file
struct Settings {
    lexicon: Option<PathBuf>,
    board: Option<PathBuf>,
    random: Option<(usize, Option<u64>)>,
    min_length: usize,
}

impl Settings {
    fn resolve(config: &Config, args: &GameArgs) -> Self {
        let random = args.random.map(|n| (n, args.seed));
        Self {
            lexicon: args.lexicon.clone().or_else(|| config.lexicon.clone()),
            // An explicit --random beats a board named in the config file
            board: if random.is_some() {
                None
            } else {
                args.board.clone().or_else(|| config.board.clone())
            },
            random,
            min_length: args.min_length.unwrap_or(config.min_length),
        }
    }
}

fn build_game(settings: &Settings) -> Result<WordSearchGame> {
    let mut game = WordSearchGame::new();

    match (&settings.board, settings.random) {
        (Some(path), _) => game.replace_board(Board::from_json_file(path)?),
        (None, Some((size, seed))) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            game.replace_board(generator::random_board(size, &mut rng)?);
        }
        (None, None) => debug!("no board given, using the default board"),
    }

    match &settings.lexicon {
        Some(path) => {
            game.load_lexicon(path)?;
            if let Some(lexicon) = game.lexicon() {
                info!(words = lexicon.len(), "lexicon ready");
            }
        }
        None => warn!("no lexicon given, word queries will fail"),
    }
    Ok(game)
}

fn list_words(game: &WordSearchGame, min_length: usize) -> Result<()> {
    println!("{}", game.render());
    let words = game.all_scorable_words(min_length)?;
    for word in words.iter() {
        println!("{}", word);
    }
    let score = game.score(&words, min_length)?;
    println!("{} words, {} points", words.len(), score);
    Ok(())
}

fn locate_words(game: &WordSearchGame, words: &[String]) -> Result<()> {
    println!("{}", game.render());
    for word in words {
        let path = game.locate(word)?;
        if path.is_empty() {
            println!("{}: not on board", word.to_uppercase());
        } else {
            println!("{}: {:?}", word.to_uppercase(), path);
        }
    }
    Ok(())
}

fn play(game: &WordSearchGame, min_length: usize) -> Result<()> {
    let all_words = game.all_scorable_words(min_length)?;
    let mut accepted = BTreeSet::new();

    println!("{}", game.render());
    println!(
        "{} words of {} or more letters are hidden. Enter a blank line to finish.",
        all_words.len(),
        min_length
    );
    loop {
        println!("Enter Word:");
        let line: std::result::Result<String, _> = try_read!("{}\n");
        let word = match line {
            Ok(line) => line.trim().to_uppercase(),
            Err(_) => break,
        };
        if word.is_empty() {
            break;
        }

        if accepted.contains(&word) {
            println!("Already found {}", word);
        } else if !all_words.contains(&word) {
            if word.chars().count() < min_length {
                println!("Too short, words need {} letters", min_length);
            } else if !game.is_valid_word(&word)? {
                println!("{} is not in the lexicon", word);
            } else {
                println!("{} is not on the board", word);
            }
        } else {
            let path = game.locate(&word)?;
            accepted.insert(word.clone());
            let points = game.score(&BTreeSet::from([word.clone()]), min_length)?;
            println!("{} {:?} +{}", word, path, points);
        }
    }

    let score = game.score(&accepted, min_length)?;
    println!("Found {} of {} words for {} points", accepted.len(), all_words.len(), score);
    let missed = all_words.difference(&accepted).cloned().collect::<Vec<_>>();
    if !missed.is_empty() {
        println!("Missed: {}", missed.join(" "));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(?cli, ?config, "starting");

    if let Some(threads) = cli.threads.or(config.threads) {
        info!("Setting Rayon global thread pool to {} threads.", threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| WordSearchError::InvalidArgument(e.to_string()))?;
    }

    match &cli.command {
        Commands::Words(args) => {
            let settings = Settings::resolve(&config, args);
            list_words(&build_game(&settings)?, settings.min_length)
        }
        Commands::Locate(args) => {
            let settings = Settings::resolve(&config, &args.game);
            locate_words(&build_game(&settings)?, &args.words)
        }
        Commands::Play(args) => {
            let settings = Settings::resolve(&config, args);
            play(&build_game(&settings)?, settings.min_length)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to set up logging: {}", e);
    }
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = Config {
            lexicon: Some(PathBuf::from("cfg.txt")),
            board: Some(PathBuf::from("cfg.json")),
            min_length: 4,
            threads: None,
        };
        let args = GameArgs {
            lexicon: Some(PathBuf::from("cli.txt")),
            min_length: Some(5),
            ..GameArgs::default()
        };
        let settings = Settings::resolve(&config, &args);
        assert_eq!(settings.lexicon, Some(PathBuf::from("cli.txt")));
        assert_eq!(settings.board, Some(PathBuf::from("cfg.json")));
        assert_eq!(settings.min_length, 5);

        let args = GameArgs {
            random: Some(5),
            seed: Some(1),
            ..GameArgs::default()
        };
        let settings = Settings::resolve(&config, &args);
        assert_eq!(settings.board, None);
        assert_eq!(settings.random, Some((5, Some(1))));
        assert_eq!(settings.min_length, 4);
    }

    #[test]
    fn game_without_sources_uses_default_board() {
        let settings = Settings::resolve(&Config::default(), &GameArgs::default());
        let game = build_game(&settings).unwrap();
        assert_eq!(game.board(), &Board::default());
        assert!(!game.is_lexicon_loaded());
    }

    #[test]
    fn seeded_random_board() {
        let args = GameArgs {
            random: Some(6),
            seed: Some(3),
            ..GameArgs::default()
        };
        let settings = Settings::resolve(&Config::default(), &args);
        let a = build_game(&settings).unwrap();
        let b = build_game(&settings).unwrap();
        assert_eq!(a.board().size(), 6);
        assert_eq!(a.board(), b.board());
    }
}
