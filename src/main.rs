//! Command-line interface for redsnap.
//!
//! Usage:
//!   redsnap <URL> [-o <path>] [--compact] [-q]
//!
//! Fetches the given Reddit thread and saves it as structured JSON, by
//! default to `<id>_<title>.json` in the current directory.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, Command};

use redsnap::{default_output_path, is_thread_url, parse_thread, write_json, Client};

fn cli() -> Command {
    Command::new("redsnap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch a Reddit thread and save it as structured JSON")
        .arg(
            Arg::new("url")
                .help("Thread URL, e.g. https://www.reddit.com/r/rust/comments/abc123/title/")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Output path (default: <id>_<title>.json in the current directory)"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Write compact JSON instead of pretty-printed"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress progress output; print only the output path"),
        )
}

async fn run() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let url = matches.get_one::<String>("url").expect("url is required");
    let quiet = matches.get_flag("quiet");
    let pretty = !matches.get_flag("compact");

    if !is_thread_url(url) {
        bail!(
            "invalid Reddit thread URL\n\
             Expected format: https://www.reddit.com/r/SUBREDDIT/comments/ID/TITLE/"
        );
    }

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| default_output_path(url));

    if !quiet {
        println!("Fetching thread from Reddit...");
    }
    let response = Client::new()
        .fetch_thread(url)
        .await
        .context("failed to fetch thread")?;

    if !quiet {
        println!("Parsing comments...");
    }
    let thread = parse_thread(&response)?;

    if !quiet {
        println!(
            "Found {} comments (parsed {} top-level)",
            thread.comment_count,
            thread.comments.len()
        );
    }

    write_json(&thread, &output, pretty)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if quiet {
        println!("{}", output.display());
    } else {
        println!("Saved to: {}", output.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
