
use mapseq_core::{Model, Observer};
use tracing::{debug, debug_span, trace};

use crate::{Action, Config, Error, Event, MappingFailure};

/// Maps every element of `inputs` through `model`, preserving order and length.
///
/// # Algorithm
///
/// 1. Reject the input if it is longer than [`Config::max_len`].
/// 2. For each element, in ascending index order:
///    - Call the model with a reference to the element.
///    - On success, emit [`Event::Mapped`]. If the observer returns
///      [`Action::Abort`], end the run.
///    - On failure, emit [`Event::Failed`] and end the run.
/// 3. Return the outputs, one per input.
///
/// # Observer
///
/// The observer receives one [`Event`] per mapped element. The reply to
/// [`Event::Failed`] is ignored since the run ends either way.
///
/// # Errors
///
/// - [`Error::TooLong`] if the input exceeds the configured limit; the model
///   is never called.
/// - [`Error::Mapping`] with the failing index if the model returns an error.
/// - [`Error::Aborted`] if the observer returns [`Action::Abort`].
///
/// No partial output is returned in any error case.
pub fn map<M, Obs>(
    model: &M,
    inputs: &[M::Input],
    config: &Config,
    mut observer: Obs,
) -> Result<Vec<M::Output>, Error<M::Error>>
where
    M: Model,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let len = inputs.len();
    if len > config.max_len() {
        debug!(len, max = config.max_len(), "input rejected");
        return Err(Error::TooLong {
            len,
            max: config.max_len(),
        });
    }

    let _span = debug_span!("map", len).entered();
    let mut outputs = Vec::with_capacity(len);

    for (index, input) in inputs.iter().enumerate() {
        match model.call(input) {
            Ok(output) => {
                trace!(index, "mapped");

                let event = Event::Mapped {
                    index,
                    input,
                    output: &output,
                };
                if let Some(Action::Abort) = observer.observe(&event) {
                    debug!(index, "aborted by observer");
                    return Err(Error::Aborted { index });
                }

                outputs.push(output);
            }
            Err(error) => {
                debug!(index, %error, "mapping failed");

                let event = Event::Failed {
                    index,
                    input,
                    error: &error,
                };
                let _ = observer.observe(&event);

                return Err(MappingFailure {
                    index,
                    source: error,
                }
                .into());
            }
        }
    }

    debug!("complete");
    Ok(outputs)
}

/// Maps every element of `inputs` through `model` without observer support.
///
/// This is a convenience wrapper around [`map`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::TooLong`] or [`Error::Mapping`] as described for [`map`].
pub fn map_unobserved<M>(
    model: &M,
    inputs: &[M::Input],
    config: &Config,
) -> Result<Vec<M::Output>, Error<M::Error>>
where
    M: Model,
{
    map(model, inputs, config, ())
}
