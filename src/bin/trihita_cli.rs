//! Trihita CLI - Bridge interface for the hosting framework
//!
//! Commands: themes, classify, resolve, plan
//! Outputs JSON to stdout
//! Returns non-zero on bad payloads

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use trihita_core::{
    ContentCatalog, DisplayMode, EntityId, EntityTheme, ImageSet, PageRequest, Planner,
    ViewportClass,
};

#[derive(Parser)]
#[command(name = "trihita-cli")]
#[command(about = "Trihita CLI - Multi-Tenant Presentation Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to content records directory
    #[arg(short, long, default_value = "content")]
    content_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List tenant theme bundles
    Themes,

    /// Classify a viewport width
    Classify {
        /// Width in CSS pixels
        #[arg(short, long)]
        width: u32,
    },

    /// Resolve the principal image URL from an ImageSet
    Resolve {
        /// Display mode: thumbnail or full
        #[arg(short, long, default_value = "thumbnail")]
        mode: String,

        /// Viewport width in CSS pixels
        #[arg(short, long)]
        width: u32,

        /// JSON payload (ImageSet)
        #[arg(short, long)]
        payload: String,
    },

    /// Build a page render plan
    Plan {
        /// JSON payload (PageRequest)
        #[arg(short, long)]
        payload: String,
    },
}

fn parse_mode(mode: &str) -> Option<DisplayMode> {
    match mode {
        "thumbnail" => Some(DisplayMode::Thumbnail),
        "full" => Some(DisplayMode::Full),
        _ => None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Themes => {
            let themes: Vec<_> = EntityId::ALL
                .iter()
                .map(|&id| {
                    serde_json::json!({
                        "entity": id,
                        "theme": EntityTheme::of(id),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&themes).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Classify { width } => {
            let class = ViewportClass::classify(width);
            println!(
                "{}",
                serde_json::json!({ "width": width, "class": class })
            );
            ExitCode::SUCCESS
        }

        Commands::Resolve { mode, width, payload } => {
            let mode = match parse_mode(&mode) {
                Some(m) => m,
                None => {
                    eprintln!(r#"{{"error": "Unknown mode, expected thumbnail or full"}}"#);
                    return ExitCode::FAILURE;
                }
            };

            let set: ImageSet = match serde_json::from_str(&payload) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let viewport = ViewportClass::classify(width);
            let url = set.resolve(mode, viewport);
            println!(
                "{}",
                serde_json::json!({
                    "viewport": viewport,
                    "url": url,
                    "displayable": set.is_displayable(),
                })
            );
            ExitCode::SUCCESS
        }

        Commands::Plan { payload } => {
            let request = match PageRequest::from_json(&payload) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let catalog = match ContentCatalog::load_from_dir(&cli.content_dir) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!(r#"{{"error": "Failed to load content: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let planner = Planner::new(catalog);
            let plan = planner.plan_page(&request);
            match plan.to_json() {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
