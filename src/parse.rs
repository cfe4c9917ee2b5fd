//! Turning raw listing JSON into [`Thread`] and [`Comment`] records.
//!
//! The thread endpoint returns a two-element array: a listing holding the
//! post itself, then a listing holding the comment forest. Listing items are
//! `kind`-tagged wrappers around a `data` object; `"t1"` items are comments,
//! while `"more"` markers stand in for collapsed branches and carry nothing
//! worth keeping.
//!
//! Threads in the wild are full of holes (deleted authors, removed bodies,
//! absent fields), so every field lookup here degrades to a default instead
//! of failing. The only fatal condition is a response that does not contain
//! the two listings at all.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{Comment, Thread};

/// Kind tag marking an actual comment in a listing.
const KIND_COMMENT: &str = "t1";

/// Stand-in for authors and bodies that are gone upstream.
const DELETED: &str = "[deleted]";

/// Formats a Unix timestamp as an ISO-8601 UTC string with a `Z` suffix.
///
/// Sub-second precision is kept only when the input carries any, so the
/// integral timestamps Reddit hands out come back without a fractional
/// part. Values outside chrono's representable range clamp to the epoch.
fn format_timestamp(epoch_secs: f64) -> String {
    let mut secs = epoch_secs.div_euclid(1.0) as i64;
    let mut nanos = (epoch_secs.rem_euclid(1.0) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos = 0;
    }
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Looks up a string field, falling back to `default` when the field is
/// absent or not a string. An explicit empty string is kept as-is.
fn str_or(data: &Value, key: &str, default: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_owned()
}

fn int_or_zero(data: &Value, key: &str) -> i64 {
    data.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn timestamp_or_epoch(data: &Value, key: &str) -> String {
    format_timestamp(data.get(key).and_then(Value::as_f64).unwrap_or(0.0))
}

fn is_comment(item: &Value) -> bool {
    item.get("kind").and_then(Value::as_str) == Some(KIND_COMMENT)
}

/// Normalizes one comment listing item into a [`Comment`] at the given
/// depth.
///
/// The item's `replies` field is either absent, an empty-string placeholder,
/// or a nested listing; only the listing form is walked. Children that are
/// not themselves comments (`"more"` markers for collapsed branches) are
/// skipped, and comment children recurse one level deeper, in listing order.
pub fn parse_comment(item: &Value, depth: u32) -> Comment {
    let data = item.get("data").unwrap_or(&Value::Null);

    let replies = data
        .get("replies")
        .and_then(|replies| replies.get("data"))
        .and_then(|listing| listing.get("children"))
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .filter(|child| is_comment(child))
                .map(|child| parse_comment(child, depth + 1))
                .collect()
        })
        .unwrap_or_default();

    Comment {
        id: str_or(data, "id", ""),
        author: str_or(data, "author", DELETED),
        body: str_or(data, "body", DELETED),
        score: int_or_zero(data, "score"),
        created_utc: timestamp_or_epoch(data, "created_utc"),
        depth,
        replies,
    }
}

/// Normalizes the top-level comment listing, dropping everything that is
/// not an actual comment.
pub fn parse_comments(children: &[Value]) -> Vec<Comment> {
    children
        .iter()
        .filter(|item| is_comment(item))
        .map(|item| parse_comment(item, 0))
        .collect()
}

/// Normalizes a full thread response into a [`Thread`].
///
/// `response` must be the two-element array the thread endpoint returns:
/// the post listing followed by the comment listing. Anything else fails
/// with [`Error::Structure`]. Within that shape the usual field defaults
/// apply, so a post with a deleted author or no selftext still parses.
pub fn parse_thread(response: &Value) -> Result<Thread> {
    let post = response
        .get(0)
        .and_then(|listing| listing.get("data"))
        .and_then(|data| data.get("children"))
        .and_then(|children| children.get(0))
        .and_then(|child| child.get("data"))
        .ok_or(Error::Structure("no post record in the first listing"))?;

    let children = response
        .get(1)
        .and_then(|listing| listing.get("data"))
        .and_then(|data| data.get("children"))
        .and_then(Value::as_array)
        .ok_or(Error::Structure("no comment listing in the response"))?;

    Ok(Thread {
        id: str_or(post, "id", ""),
        title: str_or(post, "title", ""),
        author: str_or(post, "author", DELETED),
        subreddit: str_or(post, "subreddit", ""),
        url: str_or(post, "url", ""),
        selftext: str_or(post, "selftext", ""),
        score: int_or_zero(post, "score"),
        created_utc: timestamp_or_epoch(post, "created_utc"),
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        comment_count: int_or_zero(post, "num_comments"),
        comments: parse_comments(children),
    })
}
