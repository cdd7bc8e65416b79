//! Domain model and payload mapping for the Twitter v1.1 read API.
//!
//! The wire format is the classic v1.1 JSON (`tweet_mode=extended`), mapped
//! field by field into owned domain values rather than derived wholesale, so
//! that soft failures (an unparseable `created_at`, a malformed profile URL)
//! can be substituted without losing the enclosing object.

pub mod model;
pub mod parse;
pub mod timestamp;
