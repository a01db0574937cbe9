//! Order-preserving, fail-fast sequence transforms.
//!
//! A transform takes a borrowed sequence of inputs and a mapping function and
//! returns a new sequence with one output per input, in the same order. The
//! input is never mutated.
//!
//! # Entry points
//!
//! - [`map_fn`] — map with a total closure
//! - [`try_map_fn`] — map with a fallible closure, stopping at the first failure
//! - [`map`] — map with a [`Model`], a [`Config`], and an [`Observer`]
//! - [`map_unobserved`] — [`map`] without an observer
//!
//! # Ordering
//!
//! The mapping function runs in ascending index order, exactly once per
//! element, on the calling thread. After a failure no further element is
//! mapped and no partial output is returned.
//!
//! # Example
//!
//! ```
//! use mapseq_core::Parse;
//! use mapseq_transform::{Config, map_unobserved};
//!
//! let parse = Parse::<&str, i64>::new();
//!
//! let parsed = map_unobserved(&parse, &["1", "2", "3"], &Config::default()).unwrap();
//! assert_eq!(parsed, vec![1, 2, 3]);
//!
//! let err = map_unobserved(&parse, &["1", "x", "3"], &Config::default()).unwrap_err();
//! assert_eq!(err.index(), Some(1));
//! ```
//!
//! [`Model`]: mapseq_core::Model
//! [`Observer`]: mapseq_core::Observer

mod action;
mod config;
mod error;
mod event;
mod func;
mod map;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, MappingFailure};
pub use event::Event;
pub use func::{map_fn, try_map_fn};
pub use map::{map, map_unobserved};
