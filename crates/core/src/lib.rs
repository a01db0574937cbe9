//! Core traits and types for order-preserving sequence transforms.
//!
//! This crate defines the shared abstractions that the transform and its
//! observers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Observer`] — receives transform events and optionally returns control actions
//! - [`from_fn`], [`try_from_fn`] — adapt closures into models
//! - [`Identity`], [`Parse`] — small reusable models

mod func;
mod model;
mod models;
mod observer;

pub use func::{FromFn, TryFromFn, from_fn, try_from_fn};
pub use model::Model;
pub use models::{Identity, Parse, ParseError};
pub use observer::Observer;
