use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use marquee::backends::{CatalogClient, TmdbBackend};
use marquee::config::Config;
use marquee::core::{
    BrowseLoader, BrowsePage, Direction, Location, Page, SearchAggregator, SearchPage,
    derive_selection,
};
use marquee::ui::TextRenderer;
use marquee::utils::AppError;

#[derive(Parser)]
#[command(name = "marquee", version, about = "Browse and search the TMDB movie and TV catalog")]
struct Cli {
    /// Page to show, e.g. `/`, `/movies/550`, `/tv/1399`, `/search?keyword=batman&movie=268`
    #[arg(default_value = "/")]
    location: String,

    /// Config file to use instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Advance every carousel this many pages before printing
    #[arg(long, default_value_t = 0)]
    pages: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "marquee=debug"
    } else {
        "marquee=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let location = Location::parse(&cli.location)?;
    info!("Opening {}", location);

    let client: Arc<dyn CatalogClient> = Arc::new(
        TmdbBackend::from_config(&config).context("Failed to create catalog client")?,
    );
    let renderer = TextRenderer::new(config.catalog.image_base_url.clone());
    let page_size = config.display.page_size;

    let output = match location.page() {
        Page::Browse(kind) => {
            let results = BrowseLoader::new(client).load(kind).await;
            let mut page = BrowsePage::new(location, results, page_size);
            page.advance_all(Direction::Forward, cli.pages);
            report_missing_selection(page.location(), page.overlay().is_some());
            renderer.render_browse(&page)
        }
        Page::Search { keyword } => {
            let results = SearchAggregator::new(client)
                .run(keyword.as_deref())
                .await;
            let mut page = SearchPage::new(location, results, page_size);
            for carousel in page.carousels_mut() {
                for _ in 0..cli.pages {
                    carousel.navigate(Direction::Forward);
                    carousel.transition_complete();
                }
            }
            report_missing_selection(page.location(), page.overlay().is_some());
            renderer.render_search(&page)
        }
        Page::Unknown => {
            return Err(AppError::InvalidLocation(location.to_string()).into());
        }
    };

    print!("{}", output);
    Ok(())
}

/// A selection that matches nothing loaded shows no overlay.
fn report_missing_selection(location: &Location, resolved: bool) {
    if let Some(selection) = derive_selection(location).selection
        && !resolved
    {
        warn!(
            "{}",
            AppError::NotFound {
                kind: selection.kind,
                id: selection.id,
            }
        );
    }
}
