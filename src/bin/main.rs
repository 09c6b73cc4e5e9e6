use clap::{Parser, Subcommand};
use keypad_core::core::codec;
use keypad_core::init;
use keypad_core::{EngineConfig, KeypadError, PredictiveEngine};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "keypad_engine")]
#[command(about = "Predictive text for a 9-key keypad")]
struct Cli {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Newline-delimited dictionary, most popular words first.
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Binary cache of the built trie.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Extra keys to look past the typed sequence for longer words (0-10).
    #[arg(long)]
    depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict words for a key sequence such as 4663.
    Suggest {
        keys: String,

        /// Print a JSON array instead of one word per line.
        #[arg(long)]
        json: bool,
    },

    /// Add a word to the dictionary.
    Learn { word: String },

    /// Check whether a word is stored at a key sequence.
    Exists { word: String, keys: String },

    /// Print the key sequence for a word.
    Encode { word: String },
}

fn main() -> ExitCode {
    init::init_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, KeypadError> {
    let open_engine = || -> Result<PredictiveEngine, KeypadError> {
        PredictiveEngine::open(&build_config(&cli)?)
    };

    match &cli.command {
        Commands::Suggest { keys, json } => {
            let keys = codec::parse_keys(keys)?;
            let suggestions = open_engine()?.get_suggestions(&keys);
            print!("{}", render_suggestions(&suggestions, *json)?);
        }
        Commands::Learn { word } => {
            open_engine()?.learn_word(&word.to_lowercase())?;
            log::info!("learned '{}'", word);
        }
        Commands::Exists { word, keys } => {
            let keys = codec::parse_keys(keys)?;
            let found = open_engine()?.word_exists_at(word, &keys);
            println!("{}", found);
            if !found {
                return Ok(ExitCode::FAILURE);
            }
        }
        // Encoding needs no dictionary.
        Commands::Encode { word } => {
            let keys: String = codec::encode(word)?.iter().map(|d| d.to_string()).collect();
            println!("{}", keys);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// One word per line, or a single JSON array line.
fn render_suggestions(suggestions: &[String], json: bool) -> Result<String, KeypadError> {
    if json {
        let mut out = serde_json::to_string(suggestions).map_err(KeypadError::Output)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(suggestions.iter().map(|word| format!("{}\n", word)).collect())
}

fn build_config(cli: &Cli) -> Result<EngineConfig, KeypadError> {
    let mut config = init::load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.dictionary {
        config.dictionary_path = path.clone();
    }
    if let Some(path) = &cli.snapshot {
        config.snapshot_path = Some(path.clone());
    }
    if let Some(n) = cli.max_suggestions {
        config.max_suggestions = n;
    }
    if let Some(depth) = cli.depth {
        config.suggestion_depth = depth;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_as_lines() {
        let words = vec!["car".to_string(), "care".to_string()];
        assert_eq!(render_suggestions(&words, false).unwrap(), "car\ncare\n");
        assert_eq!(render_suggestions(&[], false).unwrap(), "");
    }

    #[test]
    fn suggestions_as_json() {
        let words = vec!["car".to_string(), "care".to_string()];
        assert_eq!(render_suggestions(&words, true).unwrap(), "[\"car\",\"care\"]\n");
        assert_eq!(render_suggestions(&[], true).unwrap(), "[]\n");
    }

    #[test]
    fn encoding_failure_is_an_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = KeypadError::Output(err);
        assert!(err.to_string().starts_with("could not encode output"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
