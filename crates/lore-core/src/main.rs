use anyhow::Context;
use clap::{Parser, ValueEnum};
use lore_core::{
    telemetry, ArticleContentResolver, BatchOutcome, LoreConfig, ResolutionReport,
    StaticIdentity,
};
use lore_model::Viewer;
use lore_store::MemoryStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve and print one article from a JSON seed file
#[derive(Debug, Parser)]
#[command(name = "lore-view", version, about)]
struct Cli {
    /// Seed file with Categories, Users and Articles
    #[arg(long)]
    seed: PathBuf,

    /// Title of the article to show
    #[arg(long)]
    title: String,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// View as a signed-in admin
    #[arg(long)]
    admin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LoreConfig::load(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LoreConfig::default(),
    };
    telemetry::init_tracing(&config.logging).context("installing tracing subscriber")?;

    let (store, articles) = MemoryStore::load_json(&cli.seed)
        .await
        .with_context(|| format!("loading seed {}", cli.seed.display()))?;
    let article = articles
        .into_iter()
        .find(|article| article.title == cli.title)
        .with_context(|| format!("no article titled '{}'", cli.title))?;

    let viewer = cli.admin.then(|| Viewer {
        id: None,
        is_admin: true,
    });
    let resolver = ArticleContentResolver::new(Arc::new(store), Arc::new(StaticIdentity::new(viewer)))
        .with_config(&config);

    let report = resolver.resolve(Arc::new(article)).await;
    let view = resolver.view().context("article was not installed")?;

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        Format::Text => {
            print!("{view}");
            warn_failures(&report);
        }
    }
    Ok(())
}

fn warn_failures(report: &ResolutionReport) {
    for (name, outcome) in [
        ("categories", &report.categories),
        ("contributors", &report.contributors),
    ] {
        if let BatchOutcome::Failed(error) = outcome {
            eprintln!("warning: {name} unavailable: {error}");
        }
    }
}
