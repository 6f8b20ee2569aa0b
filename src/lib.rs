//! Edit-distance diffing of sequences.
//!
//! [`levenshtein::diff`] fills the full `(m + 1) x (n + 1)` distance matrix
//! between two sequences and walks it back into a list of [`Patch`]es.
//! Replaying that list in order on a copy of the old sequence, e.g. with
//! [`patch::apply`], yields the new one. Moves are not detected: a moved
//! element shows up as a deletion plus an insertion.
//!
//! Time and memory are both `O(m * n)`.

pub mod levenshtein;
pub mod patch;
#[cfg(feature = "serde")]
pub mod serialization;
#[cfg(feature = "serde")]
pub mod value;

pub use levenshtein::{diff, diff_by, diff_full, diff_with, DiffConfig, EditScript, Keyed, Patch, PatchKind};
pub use patch::{apply, PatchError};
