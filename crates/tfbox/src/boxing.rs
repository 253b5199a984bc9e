//! The value boxing engine
//!
//! Turns a native value plus its unknown/sensitive [Overlay]s into one [BoxedValue] tree.
//!
//! Boxing happens in two phases that write into the same tree:
//! 1. every position the unknown overlay marks `true` becomes [BoxedValue::Unknown]
//! 2. every leaf of the object becomes [BoxedValue::Known]
//!
//! A position can only be written once ([BoxedValue::Omitted] counts as unwritten), so an
//! unknown marking always beats a known value at the same path. Phase 2 never descends below a
//! position that phase 1 already decided is unknown.
use crate::native::{NativeValue, Scalar};
use crate::overlay::{Overlay, OverlayError};
use crate::path::{Path, Step};
use crate::value::BoxedValue;
use crate::visit::VisitLeaves;

/// Box `object` with its unknown and sensitive markings
///
/// The inputs are only read. Nothing is shared between calls.
#[tracing::instrument(level = "trace", skip_all)]
pub fn box_value(object: &NativeValue, unknown: &Overlay, sensitive: &Overlay) -> BoxedValue {
    if unknown.is_all() {
        tracing::trace!("whole value is unknown");
        return BoxedValue::unknown(sensitive.marks(&Path::root()));
    }

    let initial = BoxedValue::empty_like(object, sensitive.marks(&Path::root()));
    let boxed_unknown = box_unknown(object, unknown, sensitive, initial);
    box_known(object, sensitive, boxed_unknown)
}

/// [box_value] with overlays that have not been validated yet
///
/// `None` means there is no overlay. Fails before building anything if an overlay is neither a
/// container, a boolean nor null.
pub fn box_native(
    object: &NativeValue,
    unknown: Option<NativeValue>,
    sensitive: Option<NativeValue>,
) -> Result<BoxedValue, OverlayError> {
    let unknown = Overlay::try_from(unknown)?;
    let sensitive = Overlay::try_from(sensitive)?;

    Ok(box_value(object, &unknown, &sensitive))
}

/// Paths of all leaves in `value`
///
/// A scalar or an empty container yields only its own path, so a scalar root (or `{}`, `[]`)
/// yields just the root path.
pub fn paths(value: &NativeValue) -> Vec<Path> {
    let mut paths = vec![];
    value.visit_leaves(&mut |(path, _): (Path, &NativeValue)| paths.push(path));
    paths
}

/// Known leaf for each path in `paths`
///
/// Containers are boxed empty, their contents are expected to have their own paths. A path
/// that does not exist in `object` boxes as a known `null`.
pub fn known_values(
    paths: &[Path],
    object: &NativeValue,
    sensitive: &Overlay,
) -> Vec<BoxedValue> {
    paths
        .iter()
        .map(|path| {
            let sensitive = sensitive.marks(path);
            match object.get(path) {
                Some(NativeValue::Scalar(scalar)) => BoxedValue::known(scalar.clone(), sensitive),
                Some(NativeValue::Map(_)) => BoxedValue::empty_map(sensitive),
                Some(NativeValue::List(_)) => BoxedValue::empty_list(sensitive),
                None => BoxedValue::known(Scalar::Null, sensitive),
            }
        })
        .collect()
}

/// Unknown leaf for each path in `paths` the unknown overlay marks, `None` for the rest
pub fn unknown_values(
    paths: &[Path],
    unknown: &Overlay,
    sensitive: &Overlay,
) -> Vec<Option<BoxedValue>> {
    paths
        .iter()
        .map(|path| {
            unknown
                .marks(path)
                .then(|| BoxedValue::unknown(sensitive.marks(path)))
        })
        .collect()
}

/// Write `entries` into `initial`, in order
///
/// Missing containers along a path are created as the next step requires (map for a key, list
/// for an index), flagged sensitive if the overlay marks exactly their path. Lists grow with
/// [BoxedValue::Omitted] up to the written index. Positions that already hold anything other
/// than [BoxedValue::Omitted] are kept and the new value is dropped, as is every entry whose
/// path does not fit the shape built so far.
///
/// Without an `initial` container, the root is created from the first entry.
pub fn build(
    entries: impl IntoIterator<Item = (Path, BoxedValue)>,
    sensitive: &Overlay,
    initial: Option<BoxedValue>,
) -> BoxedValue {
    let mut builder = Builder::new(sensitive, initial);
    for (path, value) in entries {
        builder.insert(&path, value);
    }

    builder.root.unwrap_or(BoxedValue::Omitted)
}

#[tracing::instrument(level = "trace", skip_all)]
fn box_unknown(
    object: &NativeValue,
    unknown: &Overlay,
    sensitive: &Overlay,
    initial: Option<BoxedValue>,
) -> Option<BoxedValue> {
    let Some(tree) = unknown.tree() else {
        return initial;
    };

    if initial.is_none() {
        tracing::trace!(
            object = object.kind(),
            overlay = tree.kind(),
            "unknown overlay does not fit a scalar, ignored"
        );
        return None;
    }

    let unknown_paths = paths(tree);
    let unknown_values = unknown_values(&unknown_paths, unknown, sensitive);
    tracing::debug!(paths = unknown_paths.len(), "boxing unknown values");

    let entries = unknown_paths
        .into_iter()
        .zip(unknown_values)
        .filter_map(|(path, value)| value.map(|value| (path, value)));

    Some(build(entries, sensitive, initial))
}

#[tracing::instrument(level = "trace", skip_all)]
fn box_known(object: &NativeValue, sensitive: &Overlay, initial: Option<BoxedValue>) -> BoxedValue {
    let object_paths = paths(object);
    let object_values = known_values(&object_paths, object, sensitive);
    tracing::debug!(paths = object_paths.len(), "boxing known values");

    build(object_paths.into_iter().zip(object_values), sensitive, initial)
}

/// Accumulator for a single [build] call
#[derive(derive_new::new)]
struct Builder<'o> {
    sensitive: &'o Overlay,
    root: Option<BoxedValue>,
}

impl<'o> Builder<'o> {
    fn insert(&mut self, path: &Path, value: BoxedValue) {
        let Some((last, parents)) = path.steps().split_last() else {
            if matches!(self.root, None | Some(BoxedValue::Omitted)) {
                self.root = Some(value);
            } else {
                tracing::trace!("root already occupied");
            }
            return;
        };

        let sensitive = self.sensitive;
        let mut current = self.root.get_or_insert_with(|| {
            let first = parents.first().unwrap_or(last);
            BoxedValue::empty_for(first, sensitive.marks(&Path::root()))
        });

        for (depth, step) in parents.iter().enumerate() {
            let Some(slot) = slot_mut(current, step) else {
                tracing::trace!(%path, %step, "path does not fit, dropped");
                return;
            };

            if slot.is_omitted() {
                let next = &path.steps()[depth + 1];
                *slot = BoxedValue::empty_for(next, sensitive.marks(&path.prefix(depth + 1)));
            }

            current = slot;
        }

        let Some(slot) = slot_mut(current, last) else {
            tracing::trace!(%path, step = %last, "path does not fit, dropped");
            return;
        };

        if slot.is_omitted() {
            *slot = value;
        } else {
            tracing::trace!(%path, "already occupied");
        }
    }
}

/// Position `step` addresses in `container`, created as [BoxedValue::Omitted] if missing
///
/// Lists are backfilled with [BoxedValue::Omitted] so they never have gaps. A digit-only key
/// addresses a list like the index it spells.
fn slot_mut<'a>(container: &'a mut BoxedValue, step: &Step) -> Option<&'a mut BoxedValue> {
    match (container, step) {
        (BoxedValue::Map { entries, .. }, Step::Key(key)) => {
            Some(entries.entry(key.clone()).or_insert(BoxedValue::Omitted))
        }
        (BoxedValue::List { items, .. }, step) => {
            let index = step.as_index()?;
            if items.len() <= index {
                items.resize(index + 1, BoxedValue::Omitted);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}
