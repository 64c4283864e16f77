use crate::dataset::{DatasetSource, DEFAULT_LIMIT};
use crate::domain::SortKey;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listings_gallery")]
#[command(about = "Searchable gallery of short-stay listings from a static JSON dataset")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the gallery over HTTP (default)
    Serve(ServeArgs),

    /// Render one gallery page to an HTML file and exit
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset path or http(s) URL
    #[arg(short, long, default_value = "airbnb_sf_listings_500.json")]
    pub data: DatasetSource,

    /// Records kept from the head of the dataset
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Request worker threads
    #[arg(short, long, default_value_t = 8)]
    pub workers: usize,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Search term
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// price-low, price-high or rating; anything else keeps dataset order
    #[arg(short, long, default_value = "", value_parser = parse_sort)]
    pub sort: SortKey,

    /// Output HTML file
    #[arg(short, long, default_value = "gallery.html")]
    pub out: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            dataset: DatasetArgs {
                data: DatasetSource::File(PathBuf::from("airbnb_sf_listings_500.json")),
                limit: DEFAULT_LIMIT,
            },
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
        }
    }
}

fn parse_sort(value: &str) -> Result<SortKey, String> {
    Ok(SortKey::parse(value))
}
