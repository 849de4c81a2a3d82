//! Core components of the `homedeck` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`DeckClient`] and its builder.
//! - The primary [`DeckError`] type.
//! - Pure display formatting helpers shared by the widget modules.
//! - Internal networking logic.

/// The main client (`DeckClient`), builder, and per-call configuration.
pub mod client;
/// The primary error type (`DeckError`) for the crate.
pub mod error;
/// Pure formatting helpers (currency, percentage, kilobytes).
pub mod format;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::DeckClient`
pub use client::{DeckClient, DeckClientBuilder};
pub use error::DeckError;
