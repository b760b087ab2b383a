// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - sitemap: build public/sitemap.xml from the site's category config
// - counter: play a counter value change frame by frame in the terminal
//
// Rust concepts:
// - Derive macros: clap generates the parser from these types
// - Option<T>: flags the user may leave out
// - FromStr: lets clap parse our own types (dates, places) directly
// =============================================================================

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use showcase_tools::counter::Place;
use showcase_tools::sitemap::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_PATH};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "showcase-tools",
    version,
    about = "Build tooling for the component showcase site",
    long_about = "showcase-tools generates the site's sitemap.xml and previews the \
                  rolling-digit counter's animation in the terminal."
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sitemap.xml
    ///
    /// Example: showcase-tools sitemap --categories src/constants/categories.json --tools src/pages/ToolsPage.jsx
    Sitemap {
        /// Category config (JSON list of { name, subcategories })
        #[arg(long)]
        categories: PathBuf,

        /// File holding the tool ids (JSON list, or source text with `id: '...'`)
        #[arg(long)]
        tools: Option<PathBuf>,

        /// Base URL every location starts with
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Where to write the sitemap
        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// <lastmod> date as YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Animate a counter from one value to another
    ///
    /// Example: showcase-tools counter --from 9.5 --to 10.2 --places 10,1,.,0.1
    Counter {
        /// Value shown when the counter appears
        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        /// Value the counter rolls to
        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        /// Comma-separated places, "." for the decimal point
        /// (default: derived from --from)
        #[arg(long, value_delimiter = ',')]
        places: Option<Vec<Place>>,

        /// Font size in pixels
        #[arg(long, default_value_t = 100.0)]
        font_size: f64,

        /// Extra row height in pixels
        #[arg(long, default_value_t = 0.0)]
        padding: f64,

        /// Frames per second
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Stop after this many frames even if still moving
        #[arg(long, default_value_t = 600)]
        max_frames: usize,

        /// Play frames at real speed instead of as fast as possible
        #[arg(long)]
        realtime: bool,

        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,

        /// Print the resolved style maps as JSON instead of animating
        #[arg(long)]
        show_style: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sitemap_defaults() {
        let cli = Cli::parse_from(["showcase-tools", "sitemap", "--categories", "c.json"]);
        match cli.command {
            Commands::Sitemap { base_url, output, date, tools, .. } => {
                assert_eq!(base_url, DEFAULT_BASE_URL);
                assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_PATH));
                assert!(date.is_none());
                assert!(tools.is_none());
            }
            _ => panic!("expected sitemap"),
        }
    }

    #[test]
    fn test_parse_counter_places() {
        let cli = Cli::parse_from([
            "showcase-tools", "counter", "--from", "-1.5", "--to", "2", "--places", "10,1,.,0.1",
        ]);
        match cli.command {
            Commands::Counter { from, places, .. } => {
                assert_eq!(from, -1.5);
                assert_eq!(
                    places.unwrap(),
                    vec![Place::Weight(10.0), Place::Weight(1.0), Place::Decimal, Place::Weight(0.1)]
                );
            }
            _ => panic!("expected counter"),
        }
    }

    #[test]
    fn test_parse_counter_show_style() {
        let cli = Cli::parse_from(["showcase-tools", "counter", "--from", "1", "--to", "2", "--show-style"]);
        match cli.command {
            Commands::Counter { show_style, json, .. } => {
                assert!(show_style);
                assert!(!json);
            }
            _ => panic!("expected counter"),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from([
            "showcase-tools", "sitemap", "--categories", "c.json", "--date", "yesterday",
        ]);
        assert!(result.is_err());
    }
}
