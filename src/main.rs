//! Pono Spelling Corrector - Main entrypoint.
//!
//! Loads configuration and the dictionary, then either runs the interactive
//! prompt, corrects the words given on the command line, or generates
//! misspelled test input.

use clap::{Parser, Subcommand};
use pono_spell_lib::config::{self, ConfigLoader, LogConfig, PonoConfig};
use pono_spell_lib::error::{
    report_error, set_error_reporter, ErrorContext, PonoError, PonoResult, TracingErrorReporter,
};
use pono_spell_lib::generator::Misspeller;
use pono_spell_lib::loader::{self, LoadedDictionary};
use pono_spell_lib::repl::{self, Repl};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{info, warn};

/// Command line arguments for the Pono spelling corrector.
#[derive(Parser, Debug)]
#[clap(name = "Pono Spell", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Correct words typed at an interactive prompt
    Check,

    /// Correct the given words and exit
    Correct {
        /// Words to correct
        #[clap(required = true)]
        words: Vec<String>,

        /// Print the corrections as JSON
        #[clap(long)]
        json: bool,
    },

    /// Generate misspelled words from the dictionary
    Generate {
        /// Number of words to generate
        #[clap(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible run
        #[clap(short, long)]
        seed: Option<u64>,

        /// File to write the generated words to
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// they never mix with the prompt on stdout.
fn init_logging(log: &LogConfig) -> PonoResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PonoError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration and applies command-line overrides.
fn load_config(args: &Args) -> PonoResult<PonoConfig> {
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let mut config = loader.load()?;
    if let Some(path) = &args.dictionary {
        config.dictionary.path = path.clone();
    }
    Ok(config)
}

fn load_dictionary(config: &PonoConfig) -> PonoResult<LoadedDictionary> {
    Ok(loader::load_dictionary(&config.dictionary.path)?)
}

fn check(config: &PonoConfig) -> PonoResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Welcome to the Spell Checker.")?;

    let dictionary = load_dictionary(config)?;
    writeln!(
        stdout,
        "{} word(s) loaded into {} node(s) in {} millisecond(s).\n",
        dictionary.words_read,
        dictionary.trie.node_count(),
        dictionary.elapsed.as_millis()
    )?;

    let summary = Repl::new(&dictionary.trie, &config.repl).run(io::stdin().lock(), stdout)?;
    info!(
        queries = summary.queries,
        invalid = summary.invalid,
        unmatched = summary.unmatched,
        "Session finished"
    );
    Ok(())
}

fn correct(config: &PonoConfig, words: &[String], json: bool) -> PonoResult<()> {
    let dictionary = load_dictionary(config)?;
    let mut stdout = io::stdout().lock();
    let mut results = BTreeMap::new();

    for word in words {
        if let Err(e) = repl::validate_token(word, config.repl.max_word_length) {
            warn!(word = %word, error = %e, "Skipping invalid word");
            continue;
        }

        let corrections = dictionary.trie.corrections(word);
        if json {
            results.insert(word.clone(), corrections);
        } else if corrections.is_empty() {
            writeln!(stdout, "{word}: No Suggestions")?;
        } else {
            let list: Vec<&str> = corrections.iter().map(String::as_str).collect();
            writeln!(stdout, "{word}: {}", list.join(" "))?;
        }
    }

    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&results)?)?;
    }
    Ok(())
}

fn generate(
    config: &PonoConfig,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> PonoResult<()> {
    let mut generator_config = config.generator.clone();
    if let Some(count) = count {
        generator_config.count = count;
    }
    if seed.is_some() {
        generator_config.seed = seed;
    }
    if let Some(output) = output {
        generator_config.output = output;
    }

    let words = loader::read_word_file(&config.dictionary.path)?;
    let generated =
        Misspeller::from_config(&generator_config).sample(&words, generator_config.count);

    let mut file = io::BufWriter::new(std::fs::File::create(&generator_config.output)?);
    let mut stdout = io::stdout().lock();
    for word in &generated {
        writeln!(stdout, "{word}")?;
        writeln!(file, "{word}")?;
    }
    file.flush()?;

    // Lets the output be piped straight into `check`
    writeln!(stdout, "{}", config.repl.sentinel)?;

    info!(
        count = generated.len(),
        output = %generator_config.output.display(),
        "Generated misspellings"
    );
    Ok(())
}

fn gen_config(output: &Path) -> PonoResult<()> {
    info!("Generating default configuration");
    let default_config = PonoConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| PonoError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args) -> PonoResult<()> {
    if let Some(Command::GenConfig { output }) = &args.command {
        init_logging(&LogConfig::default())?;
        set_error_reporter(Arc::new(TracingErrorReporter));
        return gen_config(output);
    }

    let config = load_config(&args)?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Check) {
        Command::Check => check(&config),
        Command::Correct { words, json } => correct(&config, &words, json),
        Command::Generate {
            count,
            seed,
            output,
        } => generate(&config, count, seed, output),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        report_error(ErrorContext::new(e, "pono_spell"));
        process::exit(1);
    }
}
