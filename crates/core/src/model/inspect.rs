use crate::Model;

/// A wrapper that observes input and output without modifying behavior.
///
/// The output handler only runs when the call succeeds.
pub(crate) struct Inspect<M, InputHandler, OutputHandler> {
    pub(crate) model: M,
    pub(crate) input_handler: InputHandler,
    pub(crate) output_handler: OutputHandler,
}

impl<M, InputHandler, OutputHandler> Model for Inspect<M, InputHandler, OutputHandler>
where
    M: Model,
    InputHandler: Fn(&M::Input),
    OutputHandler: Fn(&M::Output),
{
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(input);
        let output = self.model.call(input)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}
