//! Lau Trie - command line entrypoint.
//!
//! Builds a trie from the lines of a text file (each line tagged with its
//! line number) and prints, queries, dumps or checks it. Logging and
//! configuration are initialized before any command runs.

use clap::{Parser, Subcommand};
use lau_trie_lib::config::printer::PrinterStyle;
use lau_trie_lib::config::trie::TrieConfig;
use lau_trie_lib::config::{self, ConfigLoader, LauConfig, LogConfig};
use lau_trie_lib::data_structures::lau_trie::{tag_sequentially, LauTrie, Tag, TrieNodeInfo};
use lau_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LauError, LauResult, TracingErrorReporter,
};
use lau_trie_lib::printer;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "Lau Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the trie built from a file
    Print {
        /// Input file, one string per line
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Override the configured printer style
        #[clap(short, long, value_enum)]
        style: Option<PrinterStyle>,
    },

    /// List stored strings starting with a prefix
    Lookup {
        /// Input file, one string per line
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Prefix to search for
        #[clap(short, long)]
        prefix: String,
    },

    /// Dump node snapshots in breadth-first order as JSON
    Dump {
        /// Input file, one string per line
        #[clap(short, long, value_parser)]
        input: PathBuf,
    },

    /// Check trie invariants and that every line can be reconstructed
    Check {
        /// Input file, one string per line
        #[clap(short, long, value_parser)]
        input: PathBuf,
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
fn init_logging(log: &LogConfig) -> LauResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(std::io::stderr);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    installed.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads `path` and tags its lines as configured.
fn load_lines(path: &Path, trie_config: &TrieConfig) -> LauResult<Vec<(String, Tag)>> {
    let content = std::fs::read_to_string(path)?;
    let lines = content
        .lines()
        .filter(|line| !(trie_config.skip_blank_lines && line.trim().is_empty()))
        .map(str::to_string);
    Ok(tag_sequentially(lines, trie_config.auto_tag_start)?)
}

fn build_trie(path: &Path, trie_config: &TrieConfig) -> LauResult<(LauTrie, Vec<(String, Tag)>)> {
    let lines = load_lines(path, trie_config)?;
    let trie = LauTrie::from_tagged(lines.iter().map(|(line, tag)| (line.as_str(), *tag)))?;
    info!(path = %path.display(), lines = lines.len(), nodes = trie.node_count(), "trie built");
    Ok((trie, lines))
}

/// Runs a command that needs a trie.
fn run(command: Command, config: &LauConfig) -> LauResult<()> {
    match command {
        Command::Print { input, style } => {
            let (trie, _) = build_trie(&input, &config.trie)?;
            let mut printer_config = config.printer.clone();
            if let Some(style) = style {
                printer_config.style = style;
            }
            print!("{}", trie.render_with(printer::from_config(&printer_config).as_ref()));
            Ok(())
        }
        Command::Lookup { input, prefix } => {
            let (trie, _) = build_trie(&input, &config.trie)?;
            for (tag, key) in trie.find_by_prefix(&prefix) {
                println!("{tag}\t{key}");
            }
            Ok(())
        }
        Command::Dump { input } => {
            let (trie, _) = build_trie(&input, &config.trie)?;
            let mut nodes: Vec<TrieNodeInfo> = Vec::with_capacity(trie.node_count());
            trie.walk_row_order(|node| {
                nodes.push(node.value.clone());
                true
            })?;
            println!("{}", serde_json::to_string_pretty(&nodes)?);
            Ok(())
        }
        Command::Check { input } => {
            let (trie, lines) = build_trie(&input, &config.trie)?;
            trie.verify_invariants()?;
            let expected: BTreeMap<Tag, String> = lines
                .into_iter()
                .filter(|(line, _)| !line.is_empty())
                .map(|(line, tag)| (tag, line))
                .collect();
            let restored = trie.reconstruct();
            if restored != expected {
                let missing = expected
                    .iter()
                    .filter(|(tag, line)| restored.get(tag) != Some(line))
                    .count();
                return Err(LauError::Custom(format!(
                    "{missing} of {} lines could not be reconstructed",
                    expected.len()
                )));
            }
            println!("ok: {} strings in {} nodes", expected.len(), trie.node_count());
            Ok(())
        }
        Command::Validate | Command::GenConfig { .. } => Ok(()),
    }
}

/// Main entry point for the application.
fn main() -> LauResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = config_loader.load();

    // Logging follows the loaded configuration; fall back to defaults so a
    // broken config file is still reported through tracing.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e.into(), "config").with_details("loading configuration"));
            process::exit(1);
        }
    };

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LauConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LauError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        command => {
            config::init_global_config(config);
            let config = config::get_global_config();
            if let Err(e) = run(command, config.get()) {
                report_error(ErrorContext::new(e, "cli"));
                process::exit(1);
            }
            Ok(())
        }
    }
}
