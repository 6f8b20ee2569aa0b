//! Wire format for patches.
//!
//! A patch is encoded as `{"index": 2, "type": 1, "item": ...}` where
//! `type` is the numeric [`PatchKind`] tag and `item` is omitted for
//! deletions. This is the shape external appliers consume.

use crate::levenshtein::{Patch, PatchKind};
use crate::patch::PatchError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct RawPatchRef<'a, T> {
    index: usize,
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<&'a T>,
}

#[derive(Deserialize)]
struct RawPatch<T> {
    index: usize,
    #[serde(rename = "type")]
    kind: u8,
    item: Option<T>,
}

impl<T> TryFrom<RawPatch<T>> for Patch<T> {
    type Error = PatchError;

    fn try_from(raw: RawPatch<T>) -> Result<Self, Self::Error> {
        let kind = PatchKind::try_from(raw.kind)?;
        let index = raw.index;
        match (kind, raw.item) {
            (PatchKind::Deletion, _) => Ok(Patch::Deletion { index }),
            (PatchKind::Insertion, Some(item)) => Ok(Patch::Insertion { index, item }),
            (PatchKind::Substitution, Some(item)) => Ok(Patch::Substitution { index, item }),
            (kind, None) => Err(PatchError::MissingItem(kind)),
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawPatchRef {
            index: self.index(),
            kind: self.kind().tag(),
            item: self.item(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPatch::<T>::deserialize(deserializer)?;
        Patch::try_from(raw).map_err(D::Error::custom)
    }
}

impl Serialize for PatchKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for PatchKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = u8::deserialize(deserializer)?;
        PatchKind::try_from(tag).map_err(D::Error::custom)
    }
}
