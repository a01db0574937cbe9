/// Actions an observer can take during a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Abort the transform after the element just mapped.
    ///
    /// The run ends with [`Error::Aborted`](crate::Error::Aborted); outputs
    /// produced so far are discarded.
    Abort,
}
