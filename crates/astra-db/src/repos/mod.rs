//! Repository modules implementing the data-model operations.
//!
//! Each module adds methods to `AstraService` via `impl AstraService` blocks.

pub mod mission;
pub mod planet;
pub mod scientist;
