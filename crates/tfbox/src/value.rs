//! boxed value representation
//!
//! The output model of [crate::boxing]. Every node knows whether it is
//! - known (a concrete scalar)
//! - unknown (only determined at apply time)
//! - omitted (a list slot nothing was said about)
//! - a map or a list of further boxed values
//!
//! and, except for omitted slots, whether it is sensitive.
//!
//! Serialized form (internally tagged):
//! ```json
//! { "kind": "map", "entries": { "id": { "kind": "unknown", "sensitive": false } }, "sensitive": false }
//! ```
use crate::native::{NativeValue, Scalar};
use crate::path::{Path, Step};
use crate::visit::VisitLeaves;

/// All possible boxed value types
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoxedValue {
    Known {
        value: Scalar,
        sensitive: bool,
    },
    Unknown {
        sensitive: bool,
    },
    Omitted,
    Map {
        entries: indexmap::IndexMap<String, BoxedValue>,
        sensitive: bool,
    },
    List {
        items: Vec<BoxedValue>,
        sensitive: bool,
    },
}

impl BoxedValue {
    pub fn known(value: impl Into<Scalar>, sensitive: bool) -> Self {
        BoxedValue::Known {
            value: value.into(),
            sensitive,
        }
    }

    pub fn unknown(sensitive: bool) -> Self {
        BoxedValue::Unknown { sensitive }
    }

    pub fn omitted() -> Self {
        BoxedValue::Omitted
    }

    pub fn empty_map(sensitive: bool) -> Self {
        BoxedValue::Map {
            entries: Default::default(),
            sensitive,
        }
    }

    pub fn empty_list(sensitive: bool) -> Self {
        BoxedValue::List {
            items: Default::default(),
            sensitive,
        }
    }

    /// Empty container of the same kind as `value`, `None` for scalars
    pub fn empty_like(value: &NativeValue, sensitive: bool) -> Option<Self> {
        match value {
            NativeValue::Map(_) => Some(Self::empty_map(sensitive)),
            NativeValue::List(_) => Some(Self::empty_list(sensitive)),
            NativeValue::Scalar(_) => None,
        }
    }

    /// Empty container that `step` can descend into
    pub fn empty_for(step: &Step, sensitive: bool) -> Self {
        match step {
            Step::Key(_) => Self::empty_map(sensitive),
            Step::Index(_) => Self::empty_list(sensitive),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, BoxedValue::Known { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, BoxedValue::Unknown { .. })
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, BoxedValue::Omitted)
    }

    /// The node's own flag. Children of a sensitive container carry their own.
    pub fn is_sensitive(&self) -> bool {
        match self {
            BoxedValue::Known { sensitive, .. }
            | BoxedValue::Unknown { sensitive }
            | BoxedValue::Map { sensitive, .. }
            | BoxedValue::List { sensitive, .. } => *sensitive,
            BoxedValue::Omitted => false,
        }
    }

    pub fn child(&self, step: &Step) -> Option<&BoxedValue> {
        match (self, step) {
            (BoxedValue::Map { entries, .. }, Step::Key(key)) => entries.get(key),
            (BoxedValue::List { items, .. }, Step::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    pub fn get(&self, path: &Path) -> Option<&BoxedValue> {
        path.steps()
            .iter()
            .try_fold(self, |current, step| current.child(step))
    }

    /// Strip all markings
    ///
    /// Unknown values and omitted slots become `null`.
    pub fn unbox(&self) -> NativeValue {
        match self {
            BoxedValue::Known { value, .. } => value.clone().into(),
            BoxedValue::Unknown { .. } | BoxedValue::Omitted => NativeValue::null(),
            BoxedValue::Map { entries, .. } => NativeValue::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.unbox()))
                    .collect(),
            ),
            BoxedValue::List { items, .. } => {
                NativeValue::List(items.iter().map(BoxedValue::unbox).collect())
            }
        }
    }

    /// Paths of all unknown leaves
    pub fn unknown_paths(&self) -> Vec<Path> {
        self.leaf_paths_where(BoxedValue::is_unknown)
    }

    /// Paths of all leaves flagged sensitive
    pub fn sensitive_paths(&self) -> Vec<Path> {
        self.leaf_paths_where(BoxedValue::is_sensitive)
    }

    fn leaf_paths_where(&self, predicate: impl Fn(&BoxedValue) -> bool) -> Vec<Path> {
        let mut paths = vec![];
        self.visit_leaves(&mut |(path, leaf): (Path, &BoxedValue)| {
            if predicate(leaf) {
                paths.push(path);
            }
        });
        paths
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{native, path};
    use pretty_assertions::assert_eq;

    fn sample() -> BoxedValue {
        BoxedValue::Map {
            entries: [
                ("id".to_string(), BoxedValue::unknown(false)),
                ("password".to_string(), BoxedValue::known("hunter2", true)),
                (
                    "ports".to_string(),
                    BoxedValue::List {
                        items: vec![
                            BoxedValue::omitted(),
                            BoxedValue::known(443i64, false),
                            BoxedValue::unknown(true),
                        ],
                        sensitive: false,
                    },
                ),
            ]
            .into_iter()
            .collect(),
            sensitive: false,
        }
    }

    #[test]
    fn constructors() {
        assert_eq!(
            BoxedValue::known(true, false),
            BoxedValue::Known {
                value: Scalar::Boolean(true),
                sensitive: false
            }
        );
        assert!(BoxedValue::unknown(true).is_sensitive());
        assert!(!BoxedValue::omitted().is_sensitive());
        assert_eq!(BoxedValue::empty_map(false).unbox(), native!({}));
        assert_eq!(BoxedValue::empty_list(true).unbox(), native!([]));
    }

    #[test]
    fn get() {
        let value = sample();
        assert_eq!(
            value.get(&path!["ports", 1]),
            Some(&BoxedValue::known(443i64, false))
        );
        assert_eq!(value.get(&path!["ports", 3]), None);
        assert_eq!(value.get(&path!["id", "nested"]), None);
    }

    #[test]
    fn unbox_replaces_unknown_with_null() {
        assert_eq!(
            sample().unbox(),
            native!({ "id": null, "password": "hunter2", "ports": [null, 443, null] })
        );
    }

    #[test]
    fn leaf_queries() {
        let value = sample();
        assert_eq!(value.unknown_paths(), vec![path!["id"], path!["ports", 2]]);
        assert_eq!(
            value.sensitive_paths(),
            vec![path!["password"], path!["ports", 2]]
        );
    }

    #[test]
    fn serialized_form() {
        let json = serde_json::to_value(BoxedValue::List {
            items: vec![BoxedValue::omitted(), BoxedValue::known(1i64, true)],
            sensitive: false,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "list",
                "items": [
                    { "kind": "omitted" },
                    { "kind": "known", "value": 1, "sensitive": true }
                ],
                "sensitive": false
            })
        );
    }
}
