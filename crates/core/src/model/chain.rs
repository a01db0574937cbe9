use crate::Model;

/// A wrapper that calls two models sequentially.
///
/// Internally used by `.chain()` to combine two compatible models.
///
/// For models to be compatible, the first model's output type must match the
/// second's input and both models must share the same error type.
pub(crate) struct Chain<A, B>
where
    A: Model,
    B: Model<Input = A::Output, Error = A::Error>,
{
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Model for Chain<A, B>
where
    A: Model,
    B: Model<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    /// Calls the first model and passes its output to the second.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let intermediate = self.first.call(input)?;
        self.second.call(&intermediate)
    }
}
