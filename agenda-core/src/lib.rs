//! Core types for the agenda ecosystem.
//!
//! This crate provides everything the CLI shares with the backend wire
//! format, plus the pure filtering/grouping engine:
//! - `Event` and the `filter`/`group` modules for deciding which events
//!   are visible and how they are bucketed into day sections
//! - `protocol` module for the backend API wire types
//! - `session` module for the stored login session

pub mod clock;
pub mod error;
pub mod event;
pub mod filter;
pub mod group;
pub mod protocol;
pub mod session;

pub use event::Event;
