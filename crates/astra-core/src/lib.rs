//! # astra-core
//!
//! Core types for Astra, shared by the storage and HTTP crates:
//! - Entity structs for scientists, planets, and missions
//! - Unsaved drafts that validate every assignment
//! - Typed serialization views that break the Scientist/Mission/Planet cycle
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod views;

pub use errors::CoreError;
