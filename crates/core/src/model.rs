mod chain;
mod inspect;
mod mapped_error;

use std::error::Error as StdError;

/// A callable model that maps a typed input to a typed output.
///
/// A model borrows its input, so a sequence being transformed is never
/// mutated by the call. Models should be deterministic; any side effects they
/// perform are the caller's responsibility.
///
/// A total function is a model whose `Error` is [`std::convert::Infallible`].
///
/// ## Adapting models
///
/// - [`Model::chain()`] – Call two models in sequence.
/// - [`Model::map_error()`] – Transform the error type.
/// - [`Model::inspect()`] – Observe calls without changing behavior.
pub trait Model {
    type Input;
    type Output;
    type Error: StdError + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this model with another.
    ///
    /// The returned model calls `self`, then passes its output to `next`.
    /// Both models must share the same error type.
    ///
    /// # Example
    ///
    /// ```
    /// use mapseq_core::{Model, from_fn};
    ///
    /// let double = from_fn(|x: &i32| x * 2);
    /// let increment = from_fn(|x: &i32| x + 1);
    ///
    /// let chain = double.chain(increment);
    /// assert_eq!(chain.call(&3).unwrap(), 7);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Model<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Model<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }

    /// Transforms this model's error type.
    ///
    /// # Example
    ///
    /// ```
    /// use mapseq_core::{Model, Parse};
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("bad row")]
    /// struct BadRow;
    ///
    /// let parse = Parse::<&str, u8>::new().map_error(|_| BadRow);
    /// assert!(parse.call(&"300").is_err());
    /// ```
    fn map_error<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Model<Input = Self::Input, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: StdError + Send + Sync + 'static,
    {
        mapped_error::MappedError::new(self, error_map)
    }

    /// Observes each call's input and successful output without changing them.
    fn inspect<InputHandler, OutputHandler>(
        self,
        input_handler: InputHandler,
        output_handler: OutputHandler,
    ) -> impl Model<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        InputHandler: Fn(&Self::Input),
        OutputHandler: Fn(&Self::Output),
    {
        inspect::Inspect {
            model: self,
            input_handler,
            output_handler,
        }
    }
}

impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, convert::Infallible};

    use thiserror::Error;

    use crate::{Parse, from_fn};

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("negative value: {0}")]
    struct Negative(i64);

    /// Square root that refuses negative inputs.
    struct CheckedSqrt;

    impl Model for CheckedSqrt {
        type Input = i64;
        type Output = f64;
        type Error = Negative;

        #[allow(clippy::cast_precision_loss)]
        fn call(&self, input: &i64) -> Result<f64, Self::Error> {
            if *input < 0 {
                return Err(Negative(*input));
            }
            Ok((*input as f64).sqrt())
        }
    }

    #[test]
    fn chain_calls_in_order() {
        let add_one = from_fn(|x: &i32| x + 1);
        let square = from_fn(|x: &i32| x * x);

        assert_eq!(add_one.chain(square).call(&2), Ok(9));
    }

    #[test]
    fn chain_stops_at_first_error() {
        let calls = RefCell::new(0);
        let negate = crate::try_from_fn(|x: &i64| Ok::<_, Negative>(-x));
        let counted = CheckedSqrt.inspect(|_| *calls.borrow_mut() += 1, |_| {});

        let chain = negate.chain(counted);
        assert_eq!(chain.call(&4), Err(Negative(-4)));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn map_error_converts_error() {
        #[derive(Debug, Error)]
        #[error("rejected")]
        struct Rejected;

        let model = CheckedSqrt.map_error(|_| Rejected);
        assert!(matches!(model.call(&-1), Err(Rejected)));
        assert!(model.call(&9).is_ok());
    }

    #[test]
    fn inspect_sees_input_and_output() {
        let seen_inputs = RefCell::new(Vec::new());
        let seen_outputs = RefCell::new(Vec::new());

        let model = Parse::<&str, i32>::new().inspect(
            |input| seen_inputs.borrow_mut().push(*input),
            |output| seen_outputs.borrow_mut().push(*output),
        );

        assert_eq!(model.call(&"7").unwrap(), 7);
        assert!(model.call(&"x").is_err());

        assert_eq!(*seen_inputs.borrow(), vec!["7", "x"]);
        assert_eq!(*seen_outputs.borrow(), vec![7]);
    }

    #[test]
    fn references_are_models() {
        fn call_twice<M: Model<Input = i32, Output = i32, Error = Infallible>>(m: M) -> i32 {
            m.call(&1).unwrap() + m.call(&2).unwrap()
        }

        let model = from_fn(|x: &i32| x * 10);
        assert_eq!(call_twice(&model), 30);
        assert_eq!(model.call(&3), Ok(30));
    }
}
