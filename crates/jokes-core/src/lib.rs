//! # jokes-core - Core Domain Types
//!
//! Foundation crate for the joke dispenser. Provides domain types, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Joke`] - A single joke as shown to the user
//! - [`JokePayload`] - The JSON body returned by the joke endpoint
//! - [`RequestToken`] - Monotonic id attached to every fetch
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use jokes_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{
    AppPhase, Joke, JokePayload, RequestToken, DEFAULT_ENDPOINT, FETCH_FAILED_MESSAGE,
};
