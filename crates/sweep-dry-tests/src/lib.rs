// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Sweep crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`query`] - Scripted collision backend with call log and failure injection
//! - [`receiver`] - Recording hit receiver and debug sink
//! - [`transforms`] - Mutable per-target transform table

pub mod config;
pub mod query;
pub mod receiver;
pub mod transforms;

pub use config::InMemoryConfigStore;
pub use query::ScriptedQuery;
pub use receiver::{DrawCall, RecordingReceiver, RecordingSink};
pub use transforms::StaticTransforms;
