//! Sparse markings laid over a value
//!
//! Terraform describes which parts of a planned value are unknown (`after_unknown`) or sensitive
//! (`after_sensitive`) with a structure that mirrors the value itself, with `true` at the marked
//! leaves. The same structure is used for both kinds of marking here.
use crate::native::{NativeValue, Scalar};
use crate::path::Path;

/// Markings for either unknown or sensitive positions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    /// Nothing is marked
    #[default]
    Absent,
    /// The whole value is marked, the overlay was a literal `true`
    All,
    /// Positions holding `true` are marked
    Tree(NativeValue),
}

impl Overlay {
    /// Whether exactly `path` is marked
    ///
    /// A `true` further up the tree does not mark its descendants, only [Overlay::All] does.
    pub fn marks(&self, path: &Path) -> bool {
        match self {
            Overlay::Absent => false,
            Overlay::All => true,
            Overlay::Tree(tree) => tree.get(path).and_then(NativeValue::as_bool) == Some(true),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Overlay::All)
    }

    pub fn tree(&self) -> Option<&NativeValue> {
        match self {
            Overlay::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<bool> for Overlay {
    fn from(value: bool) -> Self {
        if value {
            Overlay::All
        } else {
            Overlay::Absent
        }
    }
}

impl TryFrom<NativeValue> for Overlay {
    type Error = OverlayError;

    fn try_from(value: NativeValue) -> Result<Self, Self::Error> {
        match value {
            NativeValue::Scalar(Scalar::Boolean(b)) => Ok(b.into()),
            NativeValue::Scalar(Scalar::Null) => Ok(Overlay::Absent),
            NativeValue::Map(_) | NativeValue::List(_) => Ok(Overlay::Tree(value)),
            NativeValue::Scalar(_) => Err(OverlayError::InvalidRoot(value.kind())),
        }
    }
}

impl TryFrom<Option<NativeValue>> for Overlay {
    type Error = OverlayError;

    fn try_from(value: Option<NativeValue>) -> Result<Self, Self::Error> {
        value.map_or(Ok(Overlay::Absent), Overlay::try_from)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OverlayError {
    #[error("Overlay must be a map, a list, a boolean or null but found {0}")]
    InvalidRoot(&'static str),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{native, path};
    use pretty_assertions::assert_eq;

    #[test]
    fn marks_exact_paths_only() {
        let overlay =
            Overlay::try_from(native!({ "a": { "b": true, "c": false }, "d": true })).unwrap();

        assert!(overlay.marks(&path!["a", "b"]));
        assert!(overlay.marks(&path!["d"]));
        assert!(!overlay.marks(&path!["a", "c"]));
        assert!(!overlay.marks(&path!["a"]));
        assert!(!overlay.marks(&path!["d", "e"]));
        assert!(!overlay.marks(&path![]));
    }

    #[test]
    fn all_marks_everything() {
        assert!(Overlay::All.marks(&path![]));
        assert!(Overlay::All.marks(&path!["x", 3]));
        assert!(!Overlay::Absent.marks(&path![]));
    }

    #[test]
    fn root_conversions() {
        assert_eq!(Overlay::try_from(native!(true)), Ok(Overlay::All));
        assert_eq!(Overlay::try_from(native!(false)), Ok(Overlay::Absent));
        assert_eq!(Overlay::try_from(native!(null)), Ok(Overlay::Absent));
        assert_eq!(Overlay::try_from(None::<NativeValue>), Ok(Overlay::Absent));
        assert_eq!(
            Overlay::try_from(native!([false, true])),
            Ok(Overlay::Tree(native!([false, true])))
        );
    }

    #[test]
    fn scalar_root_is_rejected() {
        assert_eq!(
            Overlay::try_from(native!("yes")),
            Err(OverlayError::InvalidRoot("string"))
        );
        assert_eq!(
            Overlay::try_from(native!(3)).unwrap_err().to_string(),
            "Overlay must be a map, a list, a boolean or null but found integer"
        );
    }
}
