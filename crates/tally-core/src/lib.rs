//! # tally-core
//!
//! Core types for Tally: bounded counters and the book and vehicle entities
//! built on top of them.
//!
//! This crate provides:
//! - [`counter::BoundedCounter`], a saturating `[0, max]` counter
//! - Structured outcome types ([`outcome::Advance`], [`outcome::Rejection`])
//!   returned by every state-changing operation
//! - Entity structs for books (`Book`, `Fiction`, `NonFiction`) and vehicles
//!   (`Vehicle`, `Car`, `Boat`, `Plane`)
//! - Shared traits ([`traits::Describe`], [`traits::Readable`], [`traits::Movable`])
//!   and tagged variant enums for heterogeneous collections
//! - The construction error type [`errors::CoreError`]
//!
//! Nothing in this crate renders user-facing sentences beyond the
//! `describe()` summaries; presentation lives in `tally-cli`.

pub mod counter;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod outcome;
pub mod traits;
