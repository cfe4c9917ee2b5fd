//! Writing normalized threads to disk.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/comments/([^/]+)(?:/([^/]+))?").unwrap());

/// Derives a filename slug from a thread URL.
///
/// A URL like `https://www.reddit.com/r/rust/comments/abc123/cool_title/`
/// becomes `abc123_cool_title`. Without a title segment the bare thread ID
/// is used; without a `/comments/` segment at all the slug falls back to
/// `"reddit_thread"`.
pub fn thread_slug(thread_url: &str) -> String {
    match SLUG.captures(thread_url) {
        Some(caps) => match caps.get(2) {
            Some(title) => format!("{}_{}", &caps[1], title.as_str()),
            None => caps[1].to_owned(),
        },
        None => "reddit_thread".to_owned(),
    }
}

/// Default output location for a thread: `<slug>.json` in the current
/// directory.
pub fn default_output_path(thread_url: &str) -> PathBuf {
    PathBuf::from(format!("{}.json", thread_slug(thread_url)))
}

/// Serializes `value` as a JSON document at `path`, creating parent
/// directories as needed.
///
/// Pretty output is indented with two spaces; either way non-ASCII text is
/// written as UTF-8 rather than escaped.
pub fn write_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let body = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, body)?;
    Ok(())
}
