use std::{convert::Infallible, error::Error as StdError, fmt, marker::PhantomData};

use crate::Model;

/// A model backed by a total function.
///
/// Created by [`from_fn`].
pub struct FromFn<F, I, O> {
    f: F,
    _marker: PhantomData<fn(&I) -> O>,
}

/// A model backed by a fallible function.
///
/// Created by [`try_from_fn`].
pub struct TryFromFn<F, I, O, E> {
    f: F,
    _marker: PhantomData<fn(&I) -> Result<O, E>>,
}

/// Wraps a total function `&I -> O` as a [`Model`] that never fails.
///
/// # Example
///
/// ```
/// use mapseq_core::{Model, from_fn};
///
/// let len = from_fn(|s: &String| s.len());
/// assert_eq!(len.call(&"four".to_string()).unwrap(), 4);
/// ```
pub fn from_fn<F, I, O>(f: F) -> FromFn<F, I, O>
where
    F: Fn(&I) -> O,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// Wraps a fallible function `&I -> Result<O, E>` as a [`Model`].
///
/// # Example
///
/// ```
/// use mapseq_core::{Model, try_from_fn};
///
/// let parse = try_from_fn(|s: &&str| s.parse::<i32>());
/// assert_eq!(parse.call(&"12").unwrap(), 12);
/// assert!(parse.call(&"twelve").is_err());
/// ```
pub fn try_from_fn<F, I, O, E>(f: F) -> TryFromFn<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFromFn {
        f,
        _marker: PhantomData,
    }
}

impl<F, I, O> Model for FromFn<F, I, O>
where
    F: Fn(&I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = Infallible;

    fn call(&self, input: &I) -> Result<O, Self::Error> {
        Ok((self.f)(input))
    }
}

impl<F, I, O, E> Model for TryFromFn<F, I, O, E>
where
    F: Fn(&I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: &I) -> Result<O, E> {
        (self.f)(input)
    }
}

impl<F, I, O> fmt::Debug for FromFn<F, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F, I, O, E> fmt::Debug for TryFromFn<F, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFromFn").finish_non_exhaustive()
    }
}
