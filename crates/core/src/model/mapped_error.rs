use std::{error::Error as StdError, marker::PhantomData};

use crate::Model;

/// A wrapper that adapts a model by transforming its error type.
///
/// This is used internally by `.map_error()`.
pub(crate) struct MappedError<M, ErrorMap, NewError> {
    model: M,
    error_map: ErrorMap,
    _marker: PhantomData<fn() -> NewError>,
}

impl<M, ErrorMap, NewError> MappedError<M, ErrorMap, NewError> {
    pub(crate) fn new(model: M, error_map: ErrorMap) -> Self {
        Self {
            model,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<M, ErrorMap, NewError> Model for MappedError<M, ErrorMap, NewError>
where
    M: Model,
    ErrorMap: Fn(M::Error) -> NewError,
    NewError: StdError + Send + Sync + 'static,
{
    type Input = M::Input;
    type Output = M::Output;
    type Error = NewError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.model.call(input).map_err(|error| (self.error_map)(error))
    }
}
