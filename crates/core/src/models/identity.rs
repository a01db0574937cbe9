use std::{convert::Infallible, fmt, marker::PhantomData};

use crate::Model;

/// A model that returns a clone of its input.
pub struct Identity<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Identity<T> {
    /// Creates a new identity model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T: Clone> Model for Identity<T> {
    type Input = T;
    type Output = T;
    type Error = Infallible;

    fn call(&self, input: &T) -> Result<T, Self::Error> {
        Ok(input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_input_unchanged() {
        let identity = Identity::new();
        assert_eq!(identity.call(&"word".to_string()), Ok("word".to_string()));
        assert_eq!(Identity::<Vec<u8>>::default().call(&vec![1, 2]), Ok(vec![1, 2]));
    }
}
