//! `locus`: resolve classical citations from the command line.

mod commands;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use exn::ResultExt;
use locus_config::Config;
use locus_lexicon::Lexicon;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{ErrorKind, Result};

#[derive(Parser)]
#[command(name = "locus", version, about = "Resolve free-text classical citations into CTS URNs")]
struct Cli {
    /// Configuration file, instead of searching for locus.{toml,yaml,json}
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Choose between the two forms of a citation reference, then resolve it
    Resolve {
        /// The `n` attribute of the citation's <bibl>
        #[arg(short, long)]
        attribute: Option<String>,
        /// The text of the citation's <bibl>
        #[arg(short, long)]
        inline: Option<String>,
    },
    /// Resolve one citation reference to its URN
    Urn {
        reference: String,
    },
    /// Extract and resolve the citations of a JSON Lines stream of content units
    Extract {
        /// JSON Lines file, one `{"content": ...}` object per content unit
        input: PathBuf,
        /// URN of the document the content units belong to
        #[arg(short, long)]
        prefix: String,
        /// Write content units with their citations here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep the existing outcome logs instead of starting them afresh
        #[arg(long)]
        append: bool,
    },
    /// List every abbreviation and title spelling the lexicon accepts
    TitleForms,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            // Logging is configured by the file that failed to load.
            eprintln!("{err:?}");
            return ExitCode::FAILURE;
        },
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        // Nothing went wrong, but the citation did not resolve.
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            tracing::error!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).or_raise(|| ErrorKind::Config)
}

/// Runs one command, returning whether it resolved what it was asked to.
fn run(command: Command, config: &Config) -> Result<bool> {
    let lexicon = Lexicon::standard().or_raise(|| ErrorKind::Lexicon)?;
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Resolve { attribute, inline } => {
            commands::resolve(&lexicon, attribute.as_deref(), inline.as_deref(), &mut stdout)
        },
        Command::Urn { reference } => commands::urn(&lexicon, &reference, &mut stdout),
        Command::Extract { input, prefix, output, append } => {
            let options = commands::ExtractOptions {
                input: &input,
                prefix: &prefix,
                reset: config.outcomes.reset && !append,
            };
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path).or_raise(|| ErrorKind::Write)?;
                    commands::extract(&lexicon, config, &options, &mut file)?;
                },
                None => commands::extract(&lexicon, config, &options, &mut stdout)?,
            }
            Ok(true)
        },
        Command::TitleForms => {
            commands::title_forms(&lexicon, &mut stdout)?;
            Ok(true)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_failures_are_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Config));
    }

    #[test]
    fn explicit_configuration_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locus.toml");
        std::fs::write(&path, "[outcomes]\nreset = false\n").unwrap();
        assert!(!load_config(Some(&path)).unwrap().outcomes.reset);
    }
}
