use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Elements whose equality can be narrowed down to a single named field.
///
/// Records (maps, JSON objects, user structs) return the value stored
/// under `name`; primitives have no fields and always return `None`,
/// which makes the cost oracle fall back to plain value equality.
///
/// ```
/// use listdiff::levenshtein::{cost, Keyed};
///
/// #[derive(PartialEq)]
/// struct Row {
///     id: u32,
///     label: &'static str,
/// }
///
/// impl Keyed for Row {
///     type Field = u32;
///     fn field(&self, name: &str) -> Option<&u32> {
///         (name == "id").then_some(&self.id)
///     }
/// }
///
/// let a = Row { id: 7, label: "draft" };
/// let b = Row { id: 7, label: "final" };
/// assert_eq!(cost(&a, &b, None), 1);
/// assert_eq!(cost(&a, &b, Some("id")), 0);
/// ```
pub trait Keyed: PartialEq {
    type Field: PartialEq + ?Sized;
    fn field(&self, name: &str) -> Option<&Self::Field>;
}

/// Substitution cost of `a` by `b`: 0 when they are equivalent, 1 otherwise.
///
/// Equal values always cost 0. Otherwise, if `key` names a field present
/// on both elements, the two field values decide. A key missing on either
/// side is not an error, the elements are simply different.
pub fn cost<T: Keyed + ?Sized>(a: &T, b: &T, key: Option<&str>) -> usize {
    if a == b {
        return 0;
    }
    match key.and_then(|k| Some((a.field(k)?, b.field(k)?))) {
        Some((ka, kb)) if ka == kb => 0,
        _ => 1,
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    type Field = T::Field;
    fn field(&self, name: &str) -> Option<&Self::Field> {
        (**self).field(name)
    }
}

impl<V: PartialEq, S: BuildHasher> Keyed for HashMap<String, V, S> {
    type Field = V;
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V: PartialEq> Keyed for BTreeMap<String, V> {
    type Field = V;
    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

macro_rules! impl_keyed_primitive {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                type Field = $t;
                fn field(&self, _: &str) -> Option<&Self::Field> {
                    None
                }
            }
        )*
    };
}

impl_keyed_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    str, ()
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(pairs: &[(&str, i32)]) -> HashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    proptest! {
        #[test]
        fn test_cost_symmetry(a: i32, b: i32, c: i32, d: i32) {
            let x = record(&[("id", a), ("v", b)]);
            let y = record(&[("id", c), ("v", d)]);
            prop_assert_eq!(cost(&x, &y, Some("id")), cost(&y, &x, Some("id")));
            prop_assert_eq!(cost(&x, &y, None), cost(&y, &x, None));
            prop_assert_eq!(cost(&a, &c, Some("id")), cost(&c, &a, Some("id")));
        }

        #[test]
        fn test_cost_is_zero_or_one(a: String, b: String) {
            let c = cost(a.as_str(), b.as_str(), Some("len"));
            prop_assert!(c <= 1);
            prop_assert_eq!(c == 0, a == b);
        }
    }

    #[test]
    fn test_primitives_ignore_key() {
        assert_eq!(cost(&1, &1, Some("id")), 0);
        assert_eq!(cost(&1, &2, Some("id")), 1);
        assert_eq!(cost("a", "b", Some("id")), 1);
    }

    #[test]
    fn test_key_overrides_value_equality() {
        let a = record(&[("id", 1), ("flag", 0)]);
        let b = record(&[("id", 1), ("flag", 1)]);
        assert_eq!(cost(&a, &b, None), 1);
        assert_eq!(cost(&a, &b, Some("id")), 0);
        assert_eq!(cost(&a, &b, Some("flag")), 1);
    }

    #[test]
    fn test_missing_key_falls_back_to_value_equality() {
        let a = record(&[("id", 1)]);
        let b = record(&[("key", 1)]);
        assert_eq!(cost(&a, &b, Some("id")), 1);
        assert_eq!(cost(&a, &a.clone(), Some("nope")), 0);
    }

    #[test]
    fn test_btree_records() {
        let a: BTreeMap<String, &str> = [("id".to_string(), "x")].into();
        let b: BTreeMap<String, &str> = [("id".to_string(), "x"), ("n".to_string(), "1")].into();
        assert_eq!(cost(&a, &b, Some("id")), 0);
        assert_eq!(cost(&a, &b, Some("n")), 1);
    }
}
