use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use museum_catalog::app::CatalogUseCase;
use museum_catalog::cart::{CartItemKind, CartStore};
use museum_catalog::config::Config;
use museum_catalog::domain::{ArtworkRecord, ArtworkStatus, ExhibitionRecord, ExhibitionStatus};
use museum_catalog::infra::payload::parse_list_payload;
use museum_catalog::infra::ReqwestRecordSource;
use museum_catalog::logging;
use museum_catalog::pipeline::facets::{collection_facets, kind_facets, suggested_year_range};
use museum_catalog::pipeline::query::{run_query, CatalogEntry, QueryHit};
use museum_catalog::pipeline::{ArtworkNormalizer, ExhibitionNormalizer, Normalizer, QueryState, SortMode};

#[derive(Parser)]
#[command(name = "museum-catalog")]
#[command(about = "Search and rank the museum's artwork and exhibition catalog")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List artworks matching the query
    Artworks(ListArgs),
    /// List exhibitions matching the query
    Exhibitions(ListArgs),
    /// Show one exhibition with its schedule derived from its works
    Exhibition {
        #[arg(long)]
        id: i64,
    },
    /// Show the locally cached cart and purchase history
    Cart,
}

#[derive(Args)]
struct ListArgs {
    /// Free-text search
    #[arg(long, default_value = "")]
    search: String,
    /// Lifecycle status (e.g. active, upcoming, on_display, stored); "all" for none
    #[arg(long, default_value = "all")]
    status: String,
    /// Collection label or exhibition kind; "all" for none
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "")]
    year_min: String,
    #[arg(long, default_value = "")]
    year_max: String,
    /// relevance, recent, oldest or title
    #[arg(long, default_value = "relevance")]
    sort: String,
    /// Read a saved API list payload instead of calling the API
    #[arg(long)]
    file: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn query<S>(&self, parse_status: impl Fn(&str) -> Option<S>) -> QueryState<S> {
        let mut query = QueryState::default()
            .with_search(self.search.clone())
            .with_sort(SortMode::parse(&self.sort));
        query.set_lifecycle_text(&self.status, parse_status);
        query.set_category(&self.category);
        query.set_year_bounds_text(&self.year_min, &self.year_max);
        query
    }
}

fn read_payload(path: &Path) -> Result<Vec<Value>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_list_payload(&bytes)?)
}

fn catalog(config: &Config) -> Result<CatalogUseCase> {
    let source = ReqwestRecordSource::new(&config.api)?;
    Ok(CatalogUseCase::new(Box::new(source)))
}

fn print_hits<R: CatalogEntry>(hits: &[QueryHit<R>], total: usize, json: bool, noun: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }
    println!("📊 Showing {} of {} {}", hits.len(), total, noun);
    for hit in hits {
        let year = hit
            .record
            .year()
            .map_or_else(|| "-".to_string(), |y| y.to_string());
        println!(
            "   {:<40} {:>6}  {:<10} {:>9.3}",
            hit.record.sort_title(),
            year,
            format!("{:?}", hit.status),
            hit.relevance
        );
    }
    Ok(())
}

async fn list_artworks(args: &ListArgs, config: &Config) -> Result<()> {
    let records: Vec<ArtworkRecord> = match &args.file {
        Some(path) => ArtworkNormalizer.normalize_all(&read_payload(path)?),
        None => catalog(config)?.artworks().await,
    };
    let query = args.query(ArtworkStatus::parse);
    info!(search = %query.search_text, sort = ?query.sort_mode, "querying artworks");

    let hits = run_query(&records, &query, Utc::now());
    print_hits(&hits, records.len(), args.json, "artworks")?;
    if !args.json {
        println!("   Collections: {}", collection_facets(&records).join(", "));
        if let Some((min, max)) = suggested_year_range(&records) {
            println!("   Years: {} to {}", min, max);
        }
    }
    Ok(())
}

async fn list_exhibitions(args: &ListArgs, config: &Config) -> Result<()> {
    let records: Vec<ExhibitionRecord> = match &args.file {
        Some(path) => ExhibitionNormalizer.normalize_all(&read_payload(path)?),
        None => catalog(config)?.exhibitions().await,
    };
    let query = args.query(ExhibitionStatus::parse);
    info!(search = %query.search_text, sort = ?query.sort_mode, "querying exhibitions");

    let hits = run_query(&records, &query, Utc::now());
    print_hits(&hits, records.len(), args.json, "exhibitions")?;
    if !args.json {
        println!("   Kinds: {}", kind_facets(&records).join(", "));
    }
    Ok(())
}

async fn show_exhibition(id: i64, config: &Config) -> Result<()> {
    match catalog(config)?.exhibition_detail(id).await {
        Some(expo) => println!("{}", serde_json::to_string_pretty(&expo)?),
        None => println!("⚠️  Exhibition {} not found", id),
    }
    Ok(())
}

fn show_cart(config: &Config) -> Result<()> {
    let cart = CartStore::load(&config.cart.path)?;
    if cart.is_empty() {
        println!("🛒 Cart is empty");
    } else {
        for line in &cart.lines {
            println!(
                "   {:<8} {:<40} {:>3} x {:>8.2} = {:>9.2}",
                format!("{:?}", line.kind),
                line.name,
                line.quantity,
                line.unit_price,
                line.line_total()
            );
        }
        println!(
            "   Products {:.2} | Tours {:.2} | Subtotal {:.2}",
            cart.subtotal(CartItemKind::Product),
            cart.subtotal(CartItemKind::Tour),
            cart.subtotal_all()
        );
    }
    println!("📜 {} past purchases", cart.history.len());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    info!(api = %config.api.base_url, "configuration loaded");

    match &cli.command {
        Commands::Artworks(args) => list_artworks(args, &config).await?,
        Commands::Exhibitions(args) => list_exhibitions(args, &config).await?,
        Commands::Exhibition { id } => show_exhibition(*id, &config).await?,
        Commands::Cart => show_cart(&config)?,
    }

    Ok(())
}
