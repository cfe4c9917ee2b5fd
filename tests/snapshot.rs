//! End-to-end checks over the public API: a raw thread response goes in,
//! a normalized JSON document comes out on disk.
#![recursion_limit = "256"]

use redsnap::models::Comment;
use redsnap::{parse_thread, write_json};
use serde_json::{json, Value};

/// A thread response in the shape the endpoint actually returns: a post
/// listing, then a comment listing mixing real comments with collapsed
/// branches at several levels.
fn thread_response() -> Value {
    json!([
        {
            "kind": "Listing",
            "data": {
                "children": [{
                    "kind": "t3",
                    "data": {
                        "id": "1abcde",
                        "title": "What are you working on this week?",
                        "author": "mod_bot",
                        "subreddit": "rust",
                        "url": "https://www.reddit.com/r/rust/comments/1abcde/what_are_you_working_on_this_week/",
                        "selftext": "Share your projects below.",
                        "score": 123,
                        "created_utc": 1609459200.0,
                        "num_comments": 57
                    }
                }]
            }
        },
        {
            "kind": "Listing",
            "data": {
                "children": [
                    {
                        "kind": "t1",
                        "data": {
                            "id": "c_top1",
                            "author": "alice",
                            "body": "A parser combinator library.",
                            "score": 40,
                            "created_utc": 1609462800.0,
                            "replies": {
                                "kind": "Listing",
                                "data": {
                                    "children": [
                                        {
                                            "kind": "t1",
                                            "data": {
                                                "id": "c_reply1",
                                                "body": "Neat, is it on crates.io?",
                                                "score": 7,
                                                "created_utc": 1609466400.0,
                                                "replies": {
                                                    "kind": "Listing",
                                                    "data": {
                                                        "children": [
                                                            {
                                                                "kind": "t1",
                                                                "data": {
                                                                    "id": "c_reply2",
                                                                    "author": "alice",
                                                                    "body": "[removed]",
                                                                    "score": 1,
                                                                    "created_utc": 1609470000.0,
                                                                    "replies": ""
                                                                }
                                                            },
                                                            {
                                                                "kind": "more",
                                                                "data": {"count": 3, "children": ["c_x", "c_y"]}
                                                            }
                                                        ]
                                                    }
                                                }
                                            }
                                        }
                                    ]
                                }
                            }
                        }
                    },
                    {
                        "kind": "more",
                        "data": {"count": 12, "children": ["c_a", "c_b"]}
                    },
                    {
                        "kind": "t1",
                        "data": {
                            "id": "c_top2",
                            "author": "bob",
                            "body": "Still fighting the borrow checker.",
                            "score": 15,
                            "created_utc": 1609473600.0,
                            "replies": ""
                        }
                    }
                ]
            }
        }
    ])
}

fn assert_depths(comments: &[Comment], expected: u32) {
    for comment in comments {
        assert_eq!(comment.depth, expected, "comment {}", comment.id);
        assert_depths(&comment.replies, expected + 1);
    }
}

#[test]
fn normalizes_a_realistic_thread() {
    let thread = parse_thread(&thread_response()).unwrap();

    assert_eq!(thread.id, "1abcde");
    assert_eq!(thread.subreddit, "rust");
    assert_eq!(thread.created_utc, "2021-01-01T00:00:00Z");
    assert_eq!(thread.comment_count, 57);

    // The "more" marker between the two top-level comments is gone and the
    // order of the real ones is preserved.
    let ids: Vec<&str> = thread.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c_top1", "c_top2"]);

    assert_depths(&thread.comments, 0);

    // The missing author on c_reply1 fell back to the sentinel, while the
    // already-removed body two levels down is untouched.
    let reply = &thread.comments[0].replies[0];
    assert_eq!(reply.author, "[deleted]");
    assert_eq!(reply.replies.len(), 1);
    assert_eq!(reply.replies[0].body, "[removed]");
    assert_eq!(reply.replies[0].depth, 2);
}

#[test]
fn written_snapshot_round_trips_as_json() {
    let thread = parse_thread(&thread_response()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    write_json(&thread, &path, true).unwrap();

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(written["id"], "1abcde");
    assert_eq!(written["comment_count"], 57);
    assert_eq!(written["comments"].as_array().unwrap().len(), 2);
    assert_eq!(written["comments"][0]["replies"][0]["depth"], 1);
    assert!(written["fetched_at"].as_str().unwrap().ends_with('Z'));
}
