use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

mod commands;
mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fake news detector for students", long_about = None)]
pub struct Cli {
    /// Trained model file. Without it the built-in corpus is used.
    #[arg(long, global = true)]
    model: Option<PathBuf>,
    #[arg(long, global = true, default_value = "jsonl", help = "History backend. Available: memory, jsonl (default)")]
    storage: String,
    /// History file for the jsonl backend
    #[arg(long, global = true)]
    history_path: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze pasted text. Reads stdin when neither TEXT nor --file is given.
    Analyze {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        source: Option<String>,
    },
    /// Fetch an article from the web and analyze it
    Url { url: String },
    /// List past analyses
    History,
    /// Write the history as JSON lines
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// How to spot fake news
    Learn,
    /// Train a model and save it
    Train {
        /// JSON-lines samples (built-in corpus when omitted)
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    commands::run(cli).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_with_globals() {
        let cli = Cli::try_parse_from([
            "fnd", "analyze", "Some pasted text", "--title", "Mine", "--storage", "memory", "--json",
        ])
        .unwrap();
        assert_eq!(cli.storage, "memory");
        assert!(cli.json);
        match cli.command {
            Commands::Analyze { text, title, file, .. } => {
                assert_eq!(text.as_deref(), Some("Some pasted text"));
                assert_eq!(title.as_deref(), Some("Mine"));
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(Cli::try_parse_from(["fnd", "analyze", "text", "--file", "a.txt"]).is_err());
    }

    #[test]
    fn test_train_requires_out() {
        assert!(Cli::try_parse_from(["fnd", "train"]).is_err());
        assert!(Cli::try_parse_from(["fnd", "train", "--out", "model.json"]).is_ok());
    }

    #[test]
    fn test_serve_default_addr() {
        let cli = Cli::try_parse_from(["fnd", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { addr } => assert_eq!(addr.port(), 8080),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
