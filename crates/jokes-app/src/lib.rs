//! jokes-app - Application state and orchestration for the joke dispenser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, and configuration
//! loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use signals::SignalAction;
pub use state::{AppState, HitBox, ViewState};

// Re-export client types for frontends
pub use jokes_client::{FetchError, HttpJokeSource, JokeSource};
