use clap::{Parser, Subcommand};
use iiif_folio::item::{IssueItem, ItemDescriptor};
use iiif_folio::{config, manifest, output};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "iiif-folio")]
#[command(about = "IIIF Presentation API v2 manifest generator")]
#[command(long_about = "\
IIIF Presentation API v2 manifest generator

Takes a resolved item description (pages, images, descriptive metadata) and
produces the IIIF Presentation 2.0 manifest: canvases in page order, one
painting annotation per canvas with a level-2 image service, a thumbnail
from the first page, and optional links to per-page annotation lists (OCR
textblocks, search hits).

Item description (JSON):

  {
    \"label\": \"The Daily Courier, 1903-05-01\",
    \"date\": \"1903-05-01T00:00:00Z\",
    \"attribution\": \"Example Libraries\",
    \"metadata\": [{\"label\": \"Volume\", \"value\": \"3\"}],
    \"pages\": [
      {\"id\": \"p1\", \"label\": \"Page 1\",
       \"image\": {\"id\": \"img1\", \"width\": 1000, \"height\": 1500}}
    ],
    \"capabilities\": {\"textblock_lists\": true, \"search_hit_lists\": true}
  }

Run 'iiif-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Generator configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a manifest from an item description
    Manifest {
        /// Resolved issue URI the manifest describes (becomes the URI base)
        #[arg(long)]
        issue_uri: String,
        /// Item description JSON file
        #[arg(long)]
        item: PathBuf,
        /// Active search term, embedded in search-hit list links
        #[arg(long)]
        query: Option<String>,
        /// Write the manifest here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate an item description without emitting the document
    Check {
        /// Item description JSON file
        #[arg(long)]
        item: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn read_descriptor(path: &Path) -> Result<ItemDescriptor, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Manifest {
            issue_uri,
            item,
            query,
            output,
        } => {
            let config = config::load_config(&cli.config)?;
            let descriptor = read_descriptor(&item)?;
            let mut issue = IssueItem::new(issue_uri, descriptor);
            if let Some(query) = query {
                issue = issue.with_query(query);
            }
            let built = manifest::build_manifest(&issue, &config)?;
            let json = serde_json::to_string_pretty(&built)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{json}"),
            }
            output::print_manifest_summary(&built);
        }
        Command::Check { item } => {
            let config = config::load_config(&cli.config)?;
            let descriptor = read_descriptor(&item)?;
            let pages = descriptor.pages.len();
            // Build against a placeholder base: validation only needs the
            // page/image data, not the real issue URI.
            manifest::generate_manifest("https://localhost/check/", descriptor, None, &config)?;
            println!("Item is valid ({pages} pages)");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
