use std::{error::Error as StdError, fmt, marker::PhantomData, str::FromStr};

use thiserror::Error;

use crate::Model;

/// A model that parses text into a value with [`FromStr`].
///
/// Parsing is strict: the whole input must be a valid representation of `T`,
/// so `" 1"` or `"1px"` are errors when `T` is an integer.
///
/// # Example
///
/// ```
/// use mapseq_core::{Model, Parse};
///
/// let parse = Parse::<&str, i64>::new();
/// assert_eq!(parse.call(&"42").unwrap(), 42);
///
/// let err = parse.call(&"x").unwrap_err();
/// assert_eq!(err.text, "x");
/// ```
pub struct Parse<S, T> {
    _marker: PhantomData<fn(&S) -> T>,
}

/// The error returned when [`Parse`] rejects its input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot parse {text:?}")]
pub struct ParseError<E> {
    /// The text that failed to parse.
    pub text: String,

    /// The underlying `FromStr` error.
    #[source]
    pub source: E,
}

impl<S, T> Parse<S, T> {
    /// Creates a new parsing model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, T> Default for Parse<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Clone for Parse<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Parse<S, T> {}

impl<S, T> fmt::Debug for Parse<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse<{}>", std::any::type_name::<T>())
    }
}

impl<S, T> Model for Parse<S, T>
where
    S: AsRef<str>,
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    type Input = S;
    type Output = T;
    type Error = ParseError<T::Err>;

    fn call(&self, input: &S) -> Result<T, Self::Error> {
        let text = input.as_ref();
        text.parse().map_err(|source| ParseError {
            text: text.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::{IntErrorKind, ParseFloatError};

    use approx::assert_relative_eq;

    #[test]
    fn parses_integers() {
        let parse = Parse::<&str, i32>::new();
        assert_eq!(parse.call(&"1"), Ok(1));
        assert_eq!(parse.call(&"-17"), Ok(-17));
    }

    #[test]
    fn parses_owned_strings() {
        let parse = Parse::<String, u16>::new();
        assert_eq!(parse.call(&"8080".to_string()), Ok(8080));
    }

    #[test]
    fn parses_floats() {
        let parse = Parse::<&str, f64>::new();
        assert_relative_eq!(parse.call(&"2.5").unwrap(), 2.5);

        let err: ParseError<ParseFloatError> = parse.call(&"two").unwrap_err();
        assert_eq!(err.text, "two");
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = Parse::<&str, i32>::new().call(&"x").unwrap_err();

        assert_eq!(err.text, "x");
        assert_eq!(err.source.kind(), &IntErrorKind::InvalidDigit);
        assert_eq!(err.to_string(), "cannot parse \"x\"");
    }

    #[test]
    fn is_strict_about_surrounding_text() {
        let parse = Parse::<&str, i32>::new();
        assert!(parse.call(&" 1").is_err());
        assert!(parse.call(&"1px").is_err());
        assert!(parse.call(&"").is_err());
    }
}
