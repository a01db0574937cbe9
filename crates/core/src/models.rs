//! Small reusable models.

mod identity;
mod parse;

pub use identity::Identity;
pub use parse::{Parse, ParseError};
