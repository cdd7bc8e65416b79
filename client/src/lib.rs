//! A read-only client for the Twitter v1.1 timeline API.
//!
//! Single-item lookups are one blocking GET each; the friends list is walked
//! lazily through [`cursor::CursorIter`], fetching one page per buffer
//! exhaustion. Rate-limit accounting is out of scope and must be handled by
//! the caller (the practical workaround is polling no faster than the
//! fifteen-minute rate-limit window).

pub mod client;
pub mod cursor;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{HttpTwitterClient, TwitterClient};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Transport error for {url}")]
    Transport {
        url: String,
        #[source]
        source: transport::Error,
    },
    #[error("Invalid payload from {url}")]
    Payload {
        url: String,
        #[source]
        source: birdfeed_api::parse::Error,
    },
    #[error("Missing next_cursor in page from {url}")]
    MissingCursor { url: String },
}
