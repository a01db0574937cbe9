//! Reusable observers for mapseq transforms.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they rely on, so they work with any event and action types that expose the
//! right capabilities.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits ([`HasIndex`], [`HasOutcome`], [`CanAbort`])
//!
//! # Observers
//!
//! - [`Logger`] — forwards each event to `tracing`
//! - [`Deadline`] — aborts a run once a wall-clock budget is spent
//!
//! [`Observer`]: mapseq_core::Observer
//! [`HasIndex`]: traits::HasIndex
//! [`HasOutcome`]: traits::HasOutcome
//! [`CanAbort`]: traits::CanAbort

mod deadline;
mod logger;
pub mod traits;

pub use deadline::Deadline;
pub use logger::Logger;
