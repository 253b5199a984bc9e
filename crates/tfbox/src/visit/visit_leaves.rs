use super::Visit;
use crate::native::NativeValue;
use crate::path::{Path, Step};
use crate::value::BoxedValue;

/// Recursively visit all leaves together with their [Path]
///
/// A leaf is anything that is not a container, or a container without children. Maps are
/// visited in iteration order and lists in index order.
pub trait VisitLeaves {
    fn visit_leaves<'a>(&'a self, visitor: &mut dyn Visit<(Path, &'a Self)>);
}

impl VisitLeaves for NativeValue {
    fn visit_leaves<'a>(&'a self, visitor: &mut dyn Visit<(Path, &'a Self)>) {
        fn walk<'a>(
            value: &'a NativeValue,
            path: &mut Path,
            visitor: &mut dyn Visit<(Path, &'a NativeValue)>,
        ) {
            match value {
                NativeValue::Map(map) if !map.is_empty() => {
                    for (key, child) in map {
                        path.push(Step::Key(key.clone()));
                        walk(child, path, visitor);
                        path.pop();
                    }
                }
                NativeValue::List(list) if !list.is_empty() => {
                    for (index, child) in list.iter().enumerate() {
                        path.push(Step::Index(index));
                        walk(child, path, visitor);
                        path.pop();
                    }
                }
                _ => visitor.visit((path.clone(), value)),
            }
        }

        walk(self, &mut Path::root(), visitor)
    }
}

impl VisitLeaves for BoxedValue {
    fn visit_leaves<'a>(&'a self, visitor: &mut dyn Visit<(Path, &'a Self)>) {
        fn walk<'a>(
            value: &'a BoxedValue,
            path: &mut Path,
            visitor: &mut dyn Visit<(Path, &'a BoxedValue)>,
        ) {
            match value {
                BoxedValue::Map { entries, .. } if !entries.is_empty() => {
                    for (key, child) in entries {
                        path.push(Step::Key(key.clone()));
                        walk(child, path, visitor);
                        path.pop();
                    }
                }
                BoxedValue::List { items, .. } if !items.is_empty() => {
                    for (index, child) in items.iter().enumerate() {
                        path.push(Step::Index(index));
                        walk(child, path, visitor);
                        path.pop();
                    }
                }
                _ => visitor.visit((path.clone(), value)),
            }
        }

        walk(self, &mut Path::root(), visitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{native, path};
    use pretty_assertions::assert_eq;

    #[test]
    fn native_leaves_in_order() {
        let value = native!({ "a": [1, { "b": 2 }], "c": {}, "d": null });

        let mut leaves = vec![];
        value.visit_leaves(&mut |(path, leaf): (Path, &NativeValue)| {
            leaves.push((path, leaf.clone()))
        });

        // serde_json orders object keys, so this is also the expected order
        assert_eq!(
            leaves,
            vec![
                (path!["a", 0], native!(1)),
                (path!["a", 1, "b"], native!(2)),
                (path!["c"], native!({})),
                (path!["d"], native!(null)),
            ]
        );
    }

    #[test]
    fn scalar_root_is_a_single_leaf() {
        let value = native!("text");

        let mut paths = vec![];
        value.visit_leaves(&mut |(path, _): (Path, &NativeValue)| paths.push(path));

        assert_eq!(paths, vec![Path::root()]);
    }
}
