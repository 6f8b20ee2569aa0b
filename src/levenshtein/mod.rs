mod keyed;
mod types;
pub use keyed::*;
pub use types::*;

use tracing::{debug, trace, warn};

/// Computes the patches turning `old` into `new`.
///
/// When `key` is given, records that carry that field on both sides are
/// compared by it alone, so an updated record with an unchanged key is
/// kept in place rather than replaced.
///
/// # Examples
///
/// ```
/// use listdiff::levenshtein::{diff, Patch};
/// use listdiff::patch::apply;
///
/// let old = vec!["a", "b", "c", "d"];
/// let new = vec!["a", "b", "e", "f", "c", "d"];
/// let patches = diff(&old, &new, None);
/// assert_eq!(
///     patches,
///     vec![
///         Patch::Insertion { index: 2, item: "f" },
///         Patch::Insertion { index: 2, item: "e" },
///     ]
/// );
/// assert_eq!(apply(&old, &patches).unwrap(), new);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
/// * `key` - Optional field name used as the identity of records
pub fn diff<T: Keyed + Clone>(old: &[T], new: &[T], key: Option<&str>) -> Vec<Patch<T>> {
    diff_full(old, new, key).patches
}

/// Like [`diff`], but also returns the distance and the whole matrix.
pub fn diff_full<T: Keyed + Clone>(old: &[T], new: &[T], key: Option<&str>) -> EditScript<T> {
    run(old, new, |a, b| cost(a, b, key), DEFAULT_LARGE_MATRIX_WARNING)
}

/// Like [`diff_full`], with the key and warning threshold taken from `config`.
pub fn diff_with<T: Keyed + Clone>(old: &[T], new: &[T], config: &DiffConfig) -> EditScript<T> {
    run(
        old,
        new,
        |a, b| cost(a, b, config.key.as_deref()),
        config.large_matrix_warning,
    )
}

/// Runs the same engine with `eq` deciding whether two elements match.
///
/// ```
/// use listdiff::levenshtein::diff_by;
///
/// let old = ["Alpha", "beta"];
/// let new = ["alpha", "BETA", "gamma"];
/// let script = diff_by(&old, &new, |a, b| a.eq_ignore_ascii_case(b));
/// assert_eq!(script.distance, 1);
/// ```
pub fn diff_by<T, F>(old: &[T], new: &[T], eq: F) -> EditScript<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    run(
        old,
        new,
        |a, b| usize::from(!eq(a, b)),
        DEFAULT_LARGE_MATRIX_WARNING,
    )
}

fn run<T, F>(old: &[T], new: &[T], cost: F, large_matrix_warning: usize) -> EditScript<T>
where
    T: Clone,
    F: Fn(&T, &T) -> usize,
{
    let cells = (old.len() + 1).saturating_mul(new.len() + 1);
    if cells > large_matrix_warning {
        warn!(
            old_len = old.len(),
            new_len = new.len(),
            cells,
            "large distance matrix, time and memory grow with old_len * new_len"
        );
    }

    let mut matrix = init_matrix(old.len(), new.len());
    fill(&mut matrix, old, new, cost);
    let patches = backtrace(&matrix, new);
    let distance = matrix.distance();
    debug!(
        old_len = old.len(),
        new_len = new.len(),
        distance,
        patches = patches.len(),
        "diff complete"
    );
    EditScript {
        distance,
        matrix,
        patches,
    }
}

/// Distances from the empty sequence: row 0 is `0..=n`, column 0 is `0..=m`.
fn init_matrix(m: usize, n: usize) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(m + 1, n + 1);
    for i in 0..=m {
        matrix.set(i, 0, i);
    }
    for j in 0..=n {
        matrix.set(0, j, j);
    }
    matrix
}

fn fill<T, F>(matrix: &mut DistanceMatrix, old: &[T], new: &[T], cost: F)
where
    F: Fn(&T, &T) -> usize,
{
    for i in 1..=old.len() {
        for j in 1..=new.len() {
            let deletion = matrix.get(i - 1, j) + 1;
            let insertion = matrix.get(i, j - 1) + 1;
            let substitution = matrix.get(i - 1, j - 1) + cost(&old[i - 1], &new[j - 1]);
            matrix.set(i, j, deletion.min(insertion).min(substitution));
        }
    }
}

/// Walks from `(m, n)` back to the origin. Ties prefer deletion, then
/// insertion, then substitution.
///
/// Patches come out in application order: every patch touches a position
/// at or before the ones emitted earlier, so its index is unaffected by
/// them. Both indices must reach zero, otherwise a leading run of pure
/// insertions or deletions would be lost.
fn backtrace<T: Clone>(matrix: &DistanceMatrix, new: &[T]) -> Vec<Patch<T>> {
    let mut i = matrix.rows() - 1;
    let mut j = matrix.cols() - 1;
    let mut patches = Vec::with_capacity(matrix.get(i, j));

    while i > 0 || j > 0 {
        let current = matrix.get(i, j);
        let patch = if i > 0 && current == matrix.get(i - 1, j) + 1 {
            i -= 1;
            Some(Patch::Deletion { index: i })
        } else if j > 0 && current == matrix.get(i, j - 1) + 1 {
            j -= 1;
            Some(Patch::Insertion {
                index: i,
                item: new[j].clone(),
            })
        } else {
            // i and j are both positive here: on an edge one of the
            // branches above always matches
            i -= 1;
            j -= 1;
            (current == matrix.get(i, j) + 1).then(|| Patch::Substitution {
                index: i,
                item: new[j].clone(),
            })
        };

        if let Some(patch) = patch {
            trace!(kind = %patch.kind(), index = patch.index(), "emit patch");
            patches.push(patch);
        }
    }

    patches
}
