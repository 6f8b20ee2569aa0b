use std::fmt;

/// Cell count above which a diff logs a warning about quadratic growth.
pub const DEFAULT_LARGE_MATRIX_WARNING: usize = 2048 * 2048;

/// A single edit against the old sequence.
///
/// Patches are only meaningful as part of the list they came from:
/// `index` refers to the old sequence *after* every earlier patch in
/// that list has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Remove the element at `index`
    Deletion { index: usize },
    /// Insert `item` at `index`, shifting later elements right
    Insertion { index: usize, item: T },
    /// Replace the element at `index` with `item`
    Substitution { index: usize, item: T },
}

impl<T> Patch<T> {
    pub fn index(&self) -> usize {
        match self {
            Patch::Deletion { index }
            | Patch::Insertion { index, .. }
            | Patch::Substitution { index, .. } => *index,
        }
    }

    pub fn kind(&self) -> PatchKind {
        match self {
            Patch::Deletion { .. } => PatchKind::Deletion,
            Patch::Insertion { .. } => PatchKind::Insertion,
            Patch::Substitution { .. } => PatchKind::Substitution,
        }
    }

    /// The new-sequence element carried by insertions and substitutions.
    pub fn item(&self) -> Option<&T> {
        match self {
            Patch::Deletion { .. } => None,
            Patch::Insertion { item, .. } | Patch::Substitution { item, .. } => Some(item),
        }
    }
}

/// Stable numeric tags for callers that apply patches themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatchKind {
    Deletion = 0,
    Insertion = 1,
    Substitution = 2,
}

impl PatchKind {
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PatchKind {
    type Error = crate::patch::PatchError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(PatchKind::Deletion),
            1 => Ok(PatchKind::Insertion),
            2 => Ok(PatchKind::Substitution),
            other => Err(crate::patch::PatchError::UnknownKind(other)),
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatchKind::Deletion => "deletion",
            PatchKind::Insertion => "insertion",
            PatchKind::Substitution => "substitution",
        })
    }
}

/// The `(m + 1) x (n + 1)` table of prefix edit distances.
///
/// Cell `(i, j)` holds the distance between `old[..i]` and `new[..j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<usize>,
    cols: usize,
}

impl DistanceMatrix {
    /// # Panics
    ///
    /// If `rows * cols` overflows `usize`.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("distance matrix of {rows} x {cols} cells overflows usize"));
        DistanceMatrix {
            data: vec![0; len],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.data.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.cols + j] = val;
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Bottom-right cell, the distance between the full sequences.
    pub fn distance(&self) -> usize {
        self.get(self.rows() - 1, self.cols - 1)
    }
}

/// Full result of a diff: the distance, the table it was read from and
/// the patches that realise it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    pub distance: usize,
    pub matrix: DistanceMatrix,
    pub patches: Vec<Patch<T>>,
}

/// Options for [`diff_with`](super::diff_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    /// Field compared instead of the whole value when both records carry it.
    pub key: Option<String>,
    /// Matrix size (in cells) above which a warning is logged.
    /// Default: 4_194_304
    pub large_matrix_warning: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            key: None,
            large_matrix_warning: DEFAULT_LARGE_MATRIX_WARNING,
        }
    }
}

impl DiffConfig {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_large_matrix_warning(mut self, cells: usize) -> Self {
        self.large_matrix_warning = cells;
        self
    }
}
