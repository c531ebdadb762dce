//! # jokes-client - Joke Endpoint Client
//!
//! Talks to the external joke service: one `GET` per fetch, expecting a 2xx
//! response with a `{ "joke": "<string>" }` JSON body.
//!
//! Depends on [`jokes_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`JokeSource`] / [`LocalJokeSource`] - Async seam the app fetches through
//! - [`HttpJokeSource`] - `reqwest`-backed implementation
//! - [`FetchError`] - Why a single fetch failed (kept for logs only)
//!
//! With the `test-helpers` feature, [`test_utils`] adds a scripted in-memory
//! source and a tiny HTTP stub server.

pub mod http;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use http::HttpJokeSource;
pub use source::{FetchError, FetchResult, JokeSource, LocalJokeSource};
