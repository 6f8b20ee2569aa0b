mod types;
pub use types::*;

use crate::levenshtein::{Patch, PatchKind};

/// Replays `patches` against a copy of `old`.
///
/// Patches are applied strictly in list order, each one against the
/// result of the previous ones.
pub fn apply<T: Clone>(old: &[T], patches: &[Patch<T>]) -> Result<Vec<T>, PatchError> {
    let mut result = old.to_vec();
    apply_in_place(&mut result, patches)?;
    Ok(result)
}

/// Replays `patches` directly on `list`.
///
/// On error `list` keeps the patches applied before the failing one.
pub fn apply_in_place<T: Clone>(list: &mut Vec<T>, patches: &[Patch<T>]) -> Result<(), PatchError> {
    for patch in patches {
        let len = list.len();
        let out_of_bounds = |kind, index| PatchError::IndexOutOfBounds { kind, index, len };
        match patch {
            Patch::Deletion { index } => {
                if *index >= len {
                    return Err(out_of_bounds(PatchKind::Deletion, *index));
                }
                list.remove(*index);
            }
            Patch::Insertion { index, item } => {
                if *index > len {
                    return Err(out_of_bounds(PatchKind::Insertion, *index));
                }
                list.insert(*index, item.clone());
            }
            Patch::Substitution { index, item } => match list.get_mut(*index) {
                Some(slot) => *slot = item.clone(),
                None => return Err(out_of_bounds(PatchKind::Substitution, *index)),
            },
        }
    }
    Ok(())
}
