use std::fs;
use std::path::{Path, PathBuf};

use bhumeet_discovery::booking::BookingForm;
use bhumeet_discovery::config::EngineConfig;
use bhumeet_discovery::domain::{RequestStatus, ServiceProvider, SprayRequest};
use bhumeet_discovery::errors::{AppError, AppResult};
use bhumeet_discovery::filters::{DistanceLimit, FilterCriteria, SortOrder};
use bhumeet_discovery::location::GeoPoint;
use bhumeet_discovery::pricing::PriceQuote;
use bhumeet_discovery::render::{crop_lines, empty_state_message, provider_row, request_row};
use bhumeet_discovery::snapshot::{decode_snapshot, SnapshotFeed};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bhumeet-discovery", about = "Inspect provider and request lists from a snapshot file")]
struct Cli {
    /// Engine config (JSON). Defaults apply when omitted.
    #[arg(long, global = true, env = "BHUMEET_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Nearest providers first.
    Providers {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        #[arg(long, default_value = "")]
        search: String,
        /// Kilometers, or "unbounded". Defaults to the configured radius.
        #[arg(long)]
        max_km: Option<String>,
    },
    /// Newest requests first.
    Requests {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long, default_value = "")]
        search: String,
        /// Exact status, e.g. "In Progress".
        #[arg(long)]
        status: Option<RequestStatus>,
        /// First day to include (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Price for the booking form.
    Quote {
        #[arg(long)]
        coupon: Option<String>,
    },
    /// Turn a filled booking form (JSON) into a pending request document.
    Book {
        form: PathBuf,
        #[arg(long)]
        id: String,
        #[arg(long)]
        user: String,
    },
    /// Crop picker search.
    Crops {
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> AppResult<Vec<String>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Providers {
            snapshot,
            lat,
            lon,
            search,
            max_km,
        } => {
            let reference = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)?),
                _ => None,
            };
            let limit = match max_km.as_deref() {
                Some(raw) => DistanceLimit::parse(raw)?,
                None => config.default_distance_limit()?,
            };

            let mut feed = SnapshotFeed::<ServiceProvider>::new(SortOrder::Proximity)
                .with_criteria(FilterCriteria::new().with_search(search).with_max_distance(limit));
            feed.set_reference(reference);
            feed.replace_snapshot(read_snapshot(&snapshot)?);

            let outcome = feed.view_annotated()?;
            Ok(match empty_state_message(&outcome) {
                Some(message) => vec![message.to_string()],
                None => outcome.items().iter().map(provider_row).collect(),
            })
        }
        Command::Requests {
            snapshot,
            search,
            status,
            from,
            to,
        } => {
            let mut criteria = FilterCriteria::new().with_search(search);
            criteria.set_status(status);
            let criteria = criteria.with_date_range(from, to)?;

            let mut feed =
                SnapshotFeed::<SprayRequest>::new(SortOrder::NewestFirst).with_criteria(criteria);
            feed.replace_snapshot(read_snapshot(&snapshot)?);

            let outcome = feed.view()?;
            Ok(match empty_state_message(&outcome) {
                Some(message) => vec![message.to_string()],
                None => outcome.items().iter().map(request_row).collect(),
            })
        }
        Command::Quote { coupon } => {
            let quote =
                PriceQuote::compute(config.base_spray_price, coupon.as_deref(), &config.coupons)?;
            Ok(vec![quote.display()])
        }
        Command::Book { form, id, user } => {
            let form: BookingForm = read_json(&form)?;
            let quote = form.quote(config.base_spray_price, &config.coupons)?;
            let request = form.into_request(id, user, &quote, Utc::now())?;
            let json = serde_json::to_string_pretty(&request).map_err(AppError::Encode)?;
            Ok(vec![json])
        }
        Command::Crops { query } => Ok(crop_lines(&query)),
    }
}

fn read_text(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_snapshot<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    decode_snapshot(&read_text(path)?).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    serde_json::from_str(&read_text(path)?).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
