use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use analytics::{AnalyticsSnapshot, FilterOptions};
use data_loader::{Dataset, MovieRecord};
use query::pagination::page_range;
use query::{QuerySpec, SortKey, SortOrder, execute};
use server::{AppState, MovieListResponse};
use tracing::error;

/// Movie Catalog - query and analytics over a movie dataset
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Serve or inspect a movie catalog loaded from CSV", long_about = None)]
struct Cli {
    /// Path to the movie dataset CSV
    #[arg(short, long, env = "MOVIES_DATA_FILE", default_value = "movies_dataset.csv", global = true)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "MOVIES_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "MOVIES_PORT", default_value = "8000")]
        port: u16,
    },

    /// List movies matching filters
    Movies {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show catalog analytics
    Analytics {
        #[arg(long)]
        json: bool,
    },

    /// Show available filter values
    Options {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Case-insensitive substring of title, original title or overview
    #[arg(long)]
    search: Option<String>,

    /// Exact genre name, e.g. "Sci-Fi"
    #[arg(long)]
    genre: Option<String>,

    /// Exact original language code, e.g. "en"
    #[arg(long)]
    language: Option<String>,

    #[arg(long)]
    year_min: Option<i32>,

    #[arg(long)]
    year_max: Option<i32>,

    #[arg(long)]
    rating_min: Option<f64>,

    #[arg(long)]
    rating_max: Option<f64>,

    /// popularity, rating, votes, year or title
    #[arg(long, default_value = "popularity")]
    sort_by: String,

    /// asc or desc
    #[arg(long, default_value = "desc")]
    sort_order: String,

    #[arg(long, default_value = "1")]
    page: usize,

    #[arg(long, default_value = "20")]
    per_page: usize,
}

impl From<QueryArgs> for QuerySpec {
    fn from(args: QueryArgs) -> Self {
        QuerySpec {
            search: args.search,
            genre: args.genre,
            language: args.language,
            year_min: args.year_min,
            year_max: args.year_max,
            rating_min: args.rating_min,
            rating_max: args.rating_max,
            ..Default::default()
        }
        .sorted(SortKey::parse(&args.sort_by), SortOrder::parse(&args.sort_order))
        .paged(args.page, args.per_page)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The dataset must be loaded before anything is served
    println!("Loading movie dataset from {}...", cli.data_file.display());
    let start = Instant::now();
    let dataset = match Dataset::load_from_file(&cli.data_file) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!("Cannot start without the movie dataset: {}", e);
            return Err(e).with_context(|| {
                format!("Failed to load movie dataset from {}", cli.data_file.display())
            });
        }
    };
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Serve { host, port } => handle_serve(dataset, SocketAddr::new(host, port)).await?,
        Commands::Movies { query, json } => handle_movies(&dataset, query.into(), json)?,
        Commands::Analytics { json } => handle_analytics(&dataset, json)?,
        Commands::Options { json } => handle_options(&dataset, json)?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(dataset: Arc<Dataset>, addr: SocketAddr) -> Result<()> {
    server::serve(AppState::new(dataset), addr)
        .await
        .with_context(|| format!("HTTP server on {addr} failed"))
}

/// Handle the 'movies' command
fn handle_movies(dataset: &Dataset, spec: QuerySpec, json: bool) -> Result<()> {
    let page = execute(dataset, &spec);

    if json {
        let response = MovieListResponse::from(page);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} matches (page {}, {} per page, sorted by {} {})",
            page.total,
            page.page,
            page.per_page,
            spec.sort_by.as_str(),
            spec.sort_order.as_str()
        )
        .bold()
        .blue()
    );

    let first_rank = page_range(page.total, spec.page, spec.per_page).start + 1;
    for (offset, movie) in page.movies.iter().enumerate() {
        print_movie(first_rank + offset, movie);
    }
    Ok(())
}

fn print_movie(rank: usize, movie: &MovieRecord) {
    let year = movie
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "????".to_string());
    let rating = movie
        .vote_average
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "-".to_string());
    let popularity = movie
        .popularity
        .map(|p| format!("{p:.1}"))
        .unwrap_or_else(|| "-".to_string());
    let genres = movie.genre_names.iter().collect::<Vec<_>>().join(", ");

    println!(
        "{}. {} ({}) [{}] rating {} ({} votes), popularity {}",
        rank.to_string().green(),
        movie.title.bold(),
        year,
        genres,
        rating,
        movie.vote_count.unwrap_or(0),
        popularity
    );
}

/// Handle the 'analytics' command
fn handle_analytics(dataset: &Dataset, json: bool) -> Result<()> {
    let snapshot = AnalyticsSnapshot::compute(dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let stats = &snapshot.stats;
    println!("{}", "Catalog summary:".bold().blue());
    println!("{}Movies: {}", "• ".cyan(), stats.total_movies);
    println!("{}Average rating: {:.2}", "• ".cyan(), stats.avg_rating);
    println!("{}Average popularity: {:.2}", "• ".cyan(), stats.avg_popularity);
    println!("{}Languages: {}", "• ".cyan(), stats.total_languages);
    println!("{}Genres: {}", "• ".cyan(), stats.total_genres);
    println!(
        "{}Years: {}-{}",
        "• ".cyan(),
        stats.year_range[0],
        stats.year_range[1]
    );

    println!("{}", "Genres:".bold().blue());
    for entry in &snapshot.genre_distribution {
        println!("  - {}: {}", entry.genre, entry.count);
    }

    println!("{}", "Ratings:".bold().blue());
    for bin in &snapshot.rating_distribution {
        println!("  - {}: {}", bin.range, bin.count);
    }

    println!("{}", "Languages:".bold().blue());
    for entry in &snapshot.language_distribution {
        println!("  - {}: {}", entry.language, entry.count);
    }

    println!("{}", "Most popular:".bold().blue());
    for (i, movie) in snapshot.top_popular.iter().enumerate() {
        println!(
            "{}. {} (popularity {:.2}, rating {:.1})",
            (i + 1).to_string().green(),
            movie.title,
            movie.popularity,
            movie.rating
        );
    }

    println!("{}", "Highest rated:".bold().blue());
    for (i, movie) in snapshot.top_rated.iter().enumerate() {
        println!(
            "{}. {} (rating {:.1}, {} votes)",
            (i + 1).to_string().green(),
            movie.title,
            movie.rating,
            movie.votes
        );
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dataset: &Dataset, json: bool) -> Result<()> {
    let options = FilterOptions::from_dataset(dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!("{}", "Filter options:".bold().blue());
    println!("{}Genres: {}", "• ".green(), options.genres.join(", "));
    println!("{}Languages: {}", "• ".green(), options.languages.join(", "));
    println!(
        "{}Years: {}-{}",
        "• ".green(),
        options.year_min,
        options.year_max
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(size: usize) -> Dataset {
        Dataset::new(
            (0..size)
                .map(|i| MovieRecord {
                    title: format!("Movie {i}"),
                    popularity: Some(i as f64),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_movies_with_huge_page_size() {
        let dataset = catalog(1);
        let spec = QuerySpec::new().paged(2, usize::MAX);
        assert!(handle_movies(&dataset, spec, false).is_ok());
    }

    #[test]
    fn test_movies_later_page() {
        let dataset = catalog(5);
        assert!(handle_movies(&dataset, QuerySpec::new().paged(3, 2), false).is_ok());
        assert!(handle_movies(&dataset, QuerySpec::new().paged(0, 2), true).is_ok());
    }

    #[test]
    fn test_query_args_into_spec() {
        let cli = Cli::parse_from([
            "movie-catalog",
            "movies",
            "--genre",
            "Sci-Fi",
            "--sort-by",
            "title",
            "--sort-order",
            "asc",
            "--page",
            "2",
        ]);
        let Commands::Movies { query, .. } = cli.command else {
            panic!("expected the movies command");
        };
        let spec = QuerySpec::from(query);
        assert_eq!(spec.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(spec.sort_by, SortKey::Title);
        assert_eq!(spec.sort_order, SortOrder::Ascending);
        assert_eq!((spec.page, spec.per_page), (2, 20));
    }
}
