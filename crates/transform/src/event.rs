use mapseq_core::Model;

/// Events emitted by a transform, one per element in ascending index order.
///
/// Each event borrows the element's input and either the output or the error
/// produced by the model for it.
pub enum Event<'a, M>
where
    M: Model,
{
    /// The model mapped the element successfully.
    Mapped {
        /// Position of the element in the input sequence.
        index: usize,

        /// The element being mapped.
        input: &'a M::Input,

        /// The model's output for this element.
        output: &'a M::Output,
    },

    /// The model failed for the element; the run ends after this event.
    Failed {
        /// Position of the element in the input sequence.
        index: usize,

        /// The element being mapped.
        input: &'a M::Input,

        /// The model error.
        error: &'a M::Error,
    },
}

impl<M: Model> Event<'_, M> {
    /// Returns the index of the element this event is about.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Mapped { index, .. } | Self::Failed { index, .. } => *index,
        }
    }

    /// Returns the input element this event is about.
    #[must_use]
    pub fn input(&self) -> &M::Input {
        match self {
            Self::Mapped { input, .. } | Self::Failed { input, .. } => input,
        }
    }

    /// Returns `true` if the element was mapped successfully.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped { .. })
    }
}
