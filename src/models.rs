//! The normalized records a thread snapshot is made of.
use serde::Serialize;

/// A single comment, together with the subtree of replies below it.
///
/// Comments exclusively own their replies, so a thread is a plain tree that
/// can be walked with ordinary recursion.
#[derive(Clone, Debug, Serialize)]
pub struct Comment {
    /// A unique ID identifying the comment.
    pub id: String,

    /// The comment author, `"[deleted]"` when no longer available upstream.
    pub author: String,

    /// The comment text, `"[deleted]"` when no longer available upstream.
    pub body: String,

    /// The score of this comment.
    pub score: i64,

    /// The date at which this comment was created, as an ISO-8601 UTC
    /// timestamp.
    pub created_utc: String,

    /// Nesting level within the thread; top-level comments sit at 0 and
    /// every reply is one deeper than its parent.
    pub depth: u32,

    /// Child comments, in listing order.
    pub replies: Vec<Comment>,
}

/// A Reddit thread: the post metadata plus its comment tree.
#[derive(Clone, Debug, Serialize)]
pub struct Thread {
    /// A unique ID identifying the thread.
    pub id: String,

    /// The post title.
    pub title: String,

    /// The post author, `"[deleted]"` when no longer available upstream.
    pub author: String,

    /// Name of the subreddit the thread was posted in.
    pub subreddit: String,

    /// URL of the linked content, or the thread itself for self-posts.
    pub url: String,

    /// The text of the post, if a self-post.
    pub selftext: String,

    /// The score of this thread.
    pub score: i64,

    /// The date at which this thread was created, as an ISO-8601 UTC
    /// timestamp.
    pub created_utc: String,

    /// The instant this snapshot was taken, as an ISO-8601 UTC timestamp.
    pub fetched_at: String,

    /// Total comment count reported by Reddit. May exceed the number of
    /// comments actually present below, since collapsed branches are not
    /// expanded.
    pub comment_count: i64,

    /// Top-level comments, in listing order.
    pub comments: Vec<Comment>,
}
