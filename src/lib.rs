//! # redsnap
//!
//! The `redsnap` crate fetches public Reddit discussion threads and
//! normalizes them into a depth-annotated comment tree that serializes
//! cleanly to JSON.
//!
//! ## Saving a thread snapshot
//!
//! The following example fetches a thread, normalizes it, and writes it out
//! as a pretty-printed JSON document.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use redsnap::{parse_thread, write_json, Client};
//!
//! # #[tokio::main]
//! # async fn main() -> redsnap::Result<()> {
//! let client = Client::new();
//! let response = client
//!     .fetch_thread("https://www.reddit.com/r/rust/comments/abc123/title/")
//!     .await?;
//!
//! let thread = parse_thread(&response)?;
//! println!("{}: {} comments", thread.title, thread.comment_count);
//!
//! write_json(&thread, Path::new("thread.json"), true)?;
//! # Ok(())
//! # }
//! ```
//!
//! **NOTE**: If you plan to fetch multiple threads, it is best to create a
//! [`Client`] and reuse it.
//!
//! ## Walking the comment tree
//!
//! Comments exclusively own their replies, so the tree walks with plain
//! recursion.
//!
//! ```rust
//! use redsnap::models::Comment;
//!
//! fn count(comments: &[Comment]) -> usize {
//!     comments.iter().map(|c| 1 + count(&c.replies)).sum()
//! }
//! ```

pub mod models;

mod client;
mod error;
mod output;
mod parse;

pub use client::{is_thread_url, Client};
pub use error::{Error, Result};
pub use output::{default_output_path, thread_slug, write_json};
pub use parse::{parse_comment, parse_comments, parse_thread};
