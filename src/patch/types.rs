use crate::levenshtein::PatchKind;
use thiserror::Error;

/// Errors raised while replaying or decoding patches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The patch points past the end of the sequence it is applied to
    #[error("{kind} at index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        kind: PatchKind,
        index: usize,
        len: usize,
    },

    /// An insertion or substitution arrived without its item
    #[error("{0} patch is missing its item")]
    MissingItem(PatchKind),

    /// The numeric patch type is none of the known tags
    #[error("unknown patch type {0}")]
    UnknownKind(u8),
}
