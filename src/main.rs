// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//
// All real work lives in the library (src/lib.rs); this file only turns CLI
// flags into library calls and prints results.
// =============================================================================

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use showcase_tools::counter::{validate_places, Counter, CounterFrame, CounterStyle, Place};
use showcase_tools::sitemap::{self, SitemapOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Sitemap { categories, tools, base_url, output, date, json } => {
            handle_sitemap(categories, tools, base_url, output, date, json).await
        }
        Commands::Counter {
            from,
            to,
            places,
            font_size,
            padding,
            fps,
            max_frames,
            realtime,
            json,
            show_style,
        } => {
            let style = CounterStyle { font_size, padding, ..Default::default() };
            if show_style {
                println!("{}", serde_json::to_string_pretty(&style.resolve())?);
                return Ok(0);
            }
            let playback = Playback { fps, max_frames, realtime, json };
            handle_counter(from, to, places, style, playback).await
        }
    }
}

// Logs go to stderr so stdout stays clean for --json output
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = format!("showcase_tools={}", level);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

// Handles the 'sitemap' subcommand
async fn handle_sitemap(
    categories: PathBuf,
    tools: Option<PathBuf>,
    base_url: String,
    output: PathBuf,
    date: Option<chrono::NaiveDate>,
    json: bool,
) -> Result<i32> {
    let mut options = SitemapOptions::new(categories);
    options.tools_path = tools;
    options.base_url = base_url;
    options.output_path = output;
    if let Some(date) = date {
        options.date = date;
    }

    debug!(?options, "generating sitemap");

    let report = sitemap::generate(&options)
        .await
        .context("sitemap generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("✓ Sitemap generated with {} URLs", report.url_count);
        println!("  Output: {}", report.output_path.display());
    }

    Ok(0)
}

// How the counter subcommand plays frames
struct Playback {
    fps: u32,
    max_frames: usize,
    realtime: bool,
    json: bool,
}

// One line of --json output
#[derive(Serialize)]
struct FrameLine<'a> {
    frame: usize,
    #[serde(flatten)]
    counter: &'a CounterFrame,
}

// Handles the 'counter' subcommand
//
// Frame 0 is the counter as first shown (at rest on --from). Then the value
// changes to --to and we tick until every strip settles.
async fn handle_counter(
    from: f64,
    to: f64,
    places: Option<Vec<Place>>,
    style: CounterStyle,
    playback: Playback,
) -> Result<i32> {
    if playback.fps == 0 {
        bail!("--fps must be at least 1");
    }

    if let Some(places) = &places {
        validate_places(places).context("invalid --places")?;
    }

    let dt = Duration::from_secs_f64(1.0 / f64::from(playback.fps));

    let mut counter = Counter::new(from, places, style);
    print_frame(0, &counter.frame(), playback.json)?;

    counter.set_value(to);

    // In realtime mode an interval paces the frames; the first tick is immediate
    let mut interval = playback.realtime.then(|| tokio::time::interval(dt));

    let mut frames = 0;
    let mut settled = counter.is_settled();

    while !settled && frames < playback.max_frames {
        if let Some(interval) = interval.as_mut() {
            interval.tick().await;
        }

        settled = !counter.tick(dt);
        frames += 1;
        print_frame(frames, &counter.frame(), playback.json)?;
    }

    if !settled {
        warn!(frames, "counter still moving after the frame limit");
    }

    if !playback.json {
        println!();
        println!("📊 Summary:");
        println!("   Value: {} -> {}", from, to);
        println!("   Frames: {}", frames);
        println!("   Settled: {}", if settled { "yes" } else { "no" });
    }

    Ok(0)
}

fn print_frame(frame: usize, counter: &CounterFrame, json: bool) -> Result<()> {
    if json {
        let line = FrameLine { frame, counter };
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!("{:>5}  {}", frame, counter.text());
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is main async when the work is mostly synchronous?
//    - File writes go through tokio::fs
//    - --realtime paces frames with tokio::time::interval, which waits
//      without blocking the thread
//
// 2. What does .context() do?
//    - Adds a message on top of the original error (anyhow::Context)
//    - "{:#}" then prints both: "sitemap generation failed: could not read ..."
//
// 3. Why tracing AND println!?
//    - println! is the program's actual output (results, frames)
//    - tracing is diagnostics; it goes to stderr and -v turns on debug detail
// -----------------------------------------------------------------------------
