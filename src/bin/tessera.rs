use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tessera::{Config, KdTreeIndex, Match, Point};

// --- CLI Configuration ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted or missing.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured point dimension.
    #[arg(long, global = true)]
    dimension: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the stored point nearest to a single query.
    Nearest {
        /// JSON file holding an array of coordinate arrays.
        #[arg(long)]
        points: PathBuf,
        /// Comma-separated query coordinates, e.g. `1.5,2,-3`.
        #[arg(long, allow_hyphen_values = true)]
        query: String,
    },
    /// Matches every query in a file to its nearest stored point.
    Match {
        #[arg(long)]
        points: PathBuf,
        /// JSON file holding an array of query coordinate arrays.
        #[arg(long)]
        queries: PathBuf,
    },
}

// --- Output ---
#[derive(Serialize, Debug)]
struct MatchOutput<'a> {
    query: &'a Point,
    slot: usize,
    point: &'a Point,
    distance: f64,
}

impl<'a> MatchOutput<'a> {
    fn new(query: &'a Point, found: Match<'a, ()>) -> Self {
        Self { query, slot: found.slot, point: found.point, distance: found.distance }
    }
}

fn load_points(path: &Path) -> Result<Vec<Point>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read points file '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse points file '{}'", path.display()))
}

fn parse_query(raw: &str) -> Result<Point> {
    raw.split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid query coordinate '{}'", c.trim()))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Point::new)
}

fn build_index(config: Config, points_path: &Path) -> Result<KdTreeIndex<()>> {
    let entries = load_points(points_path)?.into_iter().map(|p| (p, ())).collect();
    Ok(KdTreeIndex::build(config, entries)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(dimension) = cli.dimension {
        config.dimension = dimension;
    }

    match cli.command {
        Commands::Nearest { points, query } => {
            let index = build_index(config, &points)?;
            let query = parse_query(&query)?;
            let found = index.nearest(&query)?;
            println!("{}", serde_json::to_string(&MatchOutput::new(&query, found))?);
        }
        Commands::Match { points, queries } => {
            let index = build_index(config, &points)?;
            let queries = load_points(&queries)?;
            let mut matches = Vec::with_capacity(queries.len());
            for query in &queries {
                matches.push(MatchOutput::new(query, index.nearest(query)?));
            }
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let query = parse_query("1.5, -2,3").unwrap();
        assert_eq!(query, Point::from([1.5, -2.0, 3.0]));
        assert!(parse_query("1,abc").is_err());
    }
}
