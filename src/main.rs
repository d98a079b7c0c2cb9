//! Termwordle - CLI
//!
//! Picks a language pack, applies command-line overrides and plays on the
//! controlling terminal.

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use termwordle::{
    error::GameError,
    game::{EXIT_OK, EXIT_SETUP_FAILURE, GameConfig, run_round},
    langpack::{
        PackLocator, PackSource, available_languages, pack_for_language, pack_for_program,
    },
};

#[derive(Parser)]
#[command(
    name = "termwordle",
    about = "Guess the hidden word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    /// Language by name
    #[arg(short = 'l', long)]
    language: Option<String>,

    /// Language pack by file name, e.g. en_GB
    #[arg(short = 'L', long = "language-pack", conflicts_with = "language")]
    language_pack: Option<String>,

    /// Number of letters per word (default from the language pack)
    #[arg(short = 'n', long = "nb-letters")]
    letters: Option<usize>,

    /// Number of guesses per round (default from the language pack)
    #[arg(short, long)]
    attempts: Option<usize>,

    /// Difficulty from 1 (common words only) to 5 (every word)
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// Monochrome output
    #[arg(long)]
    no_color: bool,

    /// Skip the animation after a win
    #[arg(long)]
    no_animation: bool,

    /// Extra directory to search for language packs (repeatable)
    #[arg(long = "pack-dir", value_name = "DIR")]
    pack_dirs: Vec<PathBuf>,

    /// List the available language packs and exit
    #[arg(long)]
    list_packs: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            std::process::exit(EXIT_SETUP_FAILURE);
        }
    }
}

/// Parse arguments, listing the languages whose pack can be found in `--language` help
fn parse_cli() -> Cli {
    let languages = available_languages(&PackLocator::new([]).available());
    let command = Cli::command().mut_arg("language", |arg| {
        arg.help(format!("Language by name: {}", languages.join(", ")))
    });
    Cli::from_arg_matches(&command.get_matches()).unwrap_or_else(|e| e.exit())
}

/// Warn by default; `-v` and `-vv` raise the level, `RUST_LOG` refines it
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<i32> {
    let locator = PackLocator::new(cli.pack_dirs.iter().cloned());

    if cli.list_packs {
        list_packs(&locator);
        return Ok(EXIT_OK);
    }

    let packs = locator.available();
    let pack_name = resolve_pack_name(cli, &packs)?;
    let pack = locator
        .load(pack_name)
        .with_context(|| format!("Failed to load language pack {pack_name}"))?;

    let mut config = GameConfig::from_pack(&pack);
    if let Some(letters) = cli.letters {
        config.letters = letters;
    }
    if let Some(attempts) = cli.attempts {
        config.attempts = attempts;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    config.color = !cli.no_color;
    config.animate = !cli.no_animation;
    config.validate(&pack)?;

    log::debug!("Playing {} with {config:?}", pack.name());
    Ok(run_round(&pack, &config)?)
}

/// Explicit pack, then language name, then the name the program was run as
fn resolve_pack_name<'a>(
    cli: &'a Cli,
    packs: &BTreeMap<String, PackSource>,
) -> Result<&'a str, GameError> {
    if let Some(name) = &cli.language_pack {
        return Ok(name.as_str());
    }

    if let Some(language) = &cli.language {
        return pack_for_language(language, packs)
            .ok_or_else(|| GameError::UnknownLanguage(language.clone()));
    }

    let program = std::env::args().next().unwrap_or_default();
    Ok(pack_for_program(&program))
}

fn list_packs(locator: &PackLocator) {
    for (name, source) in locator.available() {
        let origin = match &source {
            PackSource::File(path) => path.display().to_string(),
            PackSource::Bundled(_) => "bundled".to_string(),
        };
        let description = match locator.load(&name) {
            Ok(pack) => format!("{} {}", pack.description(), pack.charset().pattern()),
            Err(e) => format!("{}", e.to_string().red()),
        };
        println!(
            "{} {description} {}",
            format!("{name:<8}").bold(),
            format!("({origin})").dimmed()
        );
    }
}
