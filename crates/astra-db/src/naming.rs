//! Deterministic constraint naming.
//!
//! Every index and constraint in the schema is named by these functions so
//! that DDL tooling can find and alter them without guessing:
//!
//! | Kind        | Pattern                        |
//! |-------------|--------------------------------|
//! | index       | `ix_<table>_<column>`          |
//! | unique      | `uq_<table>_<column>`          |
//! | check       | `ck_<table>_<constraint>`      |
//! | foreign key | `fk_<table>_<column>_<refers>` |
//! | primary key | `pk_<table>`                   |

#[must_use]
pub fn index(table: &str, column: &str) -> String {
    format!("ix_{table}_{column}")
}

#[must_use]
pub fn unique(table: &str, column: &str) -> String {
    format!("uq_{table}_{column}")
}

#[must_use]
pub fn check(table: &str, constraint: &str) -> String {
    format!("ck_{table}_{constraint}")
}

#[must_use]
pub fn foreign_key(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{table}_{column}_{referred_table}")
}

#[must_use]
pub fn primary_key(table: &str) -> String {
    format!("pk_{table}")
}
