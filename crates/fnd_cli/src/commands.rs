use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use fnd_core::{guide::GUIDE, Article, HistoryStore};
use fnd_inference::corpus::{builtin_samples, load_samples};
use fnd_inference::models::{train, ModelArtifact};
use fnd_inference::{create_detector, Config, Detector};
use fnd_scrappers::{ArticleExtractor, Scraper};
use fnd_web::{create_app, AppState};
use tracing::info;

use crate::{render, Cli, Commands};

/// Global flags shared by every subcommand.
struct Settings {
    model: Option<PathBuf>,
    storage: String,
    history_path: Option<PathBuf>,
    json: bool,
}

impl Settings {
    fn detector(&self) -> anyhow::Result<Detector> {
        let config = Config {
            model_path: self.model.clone(),
            ..Config::default()
        };
        let detector = create_detector(&config)?;
        info!(
            "🧠 Detector initialized successfully (using {}, {} terms)",
            detector.model_name(),
            detector.vocabulary_size()
        );
        Ok(detector)
    }

    async fn history(&self) -> anyhow::Result<Arc<dyn HistoryStore>> {
        let history = fnd_storage::create_store(&self.storage, self.history_path.as_deref()).await?;
        info!("💾 History initialized successfully (using {})", history.name());
        Ok(history)
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        model,
        storage,
        history_path,
        json,
        command,
        ..
    } = cli;
    let settings = Settings {
        model,
        storage,
        history_path,
        json,
    };

    match command {
        Commands::Analyze {
            text,
            file,
            title,
            source,
        } => {
            let content = read_content(text, file.as_deref())?;
            let mut article = Article::pasted(content);
            if let Some(title) = title {
                article = article.with_title(title);
            }
            if let Some(source) = source {
                article = article.with_source(source);
            }
            analyze(&settings, article).await
        }
        Commands::Url { url } => {
            let extractor = ArticleExtractor::new()?;
            let article = extractor.scrape_article(&url).await?;
            analyze(&settings, article).await
        }
        Commands::History => {
            let entries = settings.history().await?.list().await?;
            if settings.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", render::history(&entries));
            }
            Ok(())
        }
        Commands::Export { out } => export(&settings, out.as_deref()).await,
        Commands::Learn => {
            if settings.json {
                println!("{}", serde_json::to_string_pretty(&GUIDE)?);
            } else {
                print!("{}", GUIDE.render_text());
            }
            Ok(())
        }
        Commands::Train { data, out } => train_model(data.as_deref(), &out),
        Commands::Serve { addr } => serve(&settings, addr).await,
    }
}

fn read_content(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

async fn analyze(settings: &Settings, article: Article) -> anyhow::Result<()> {
    let detector = settings.detector()?;
    let history = settings.history().await?;

    let report = detector.analyze(&article)?;
    history
        .record_analysis(&article, report.result.clone())
        .await?;
    info!("✨ Analysis complete: {}", report.result.label);

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::report(&report));
    }
    Ok(())
}

async fn export(settings: &Settings, out: Option<&Path>) -> anyhow::Result<()> {
    let entries = settings.history().await?.list().await?;
    let written = match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let written = fnd_storage::export_jsonl(&entries, &mut BufWriter::new(file))?;
            info!("📦 Exported {} entries to {}", written, path.display());
            written
        }
        None => fnd_storage::export_jsonl(&entries, &mut io::stdout().lock())?,
    };
    tracing::debug!("Export finished ({} entries)", written);
    Ok(())
}

fn train_model(data: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let samples = match data {
        Some(path) => load_samples(path)?,
        None => builtin_samples(),
    };
    info!("📚 Training on {} samples", samples.len());
    let (vectorizer, model) = train(&samples)?;
    ModelArtifact::from_model(&vectorizer, &model).save(out)?;
    info!(
        "🧠 Model saved to {} ({} terms)",
        out.display(),
        vectorizer.vocabulary_size()
    );
    Ok(())
}

async fn serve(settings: &Settings, addr: SocketAddr) -> anyhow::Result<()> {
    let detector = settings.detector()?;
    let history = settings.history().await?;
    let extractor = ArticleExtractor::new()?;
    info!("🦗 Article extractor initialized");

    let app = create_app(AppState::new(
        Arc::new(detector),
        history,
        Arc::new(extractor),
    ));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Serving on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
