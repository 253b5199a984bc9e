//! # tfbox - boxed terraform values
//!
//! ## Introduction for developers
//!
//! Read this to understand how `tfbox` works internally.
//!
//! ### Terraform Terms
//!
//! A terraform plan describes the value each resource attribute will have after apply. Not all of
//! those values exist yet:
//! - a value can be `known`: it is already decided (`"t3.micro"`, `42`, `null`, ...)
//! - ...or `unknown`: only the provider can tell after apply (an instance id, an ip address, ...)
//! - and independent of that, a value can be `sensitive`: it must not be displayed
//!
//! Terraform reports the known part of a value as a regular object and the markings as separate
//! structures shaped like that object:
//!
//! ```json
//! {
//!   "after":           { "ami": "ami-123", "tags": { "Name": "web" } },
//!   "after_unknown":   { "id": true, "tags": {} },
//!   "after_sensitive": { "tags": { "Name": true } }
//! }
//! ```
//!
//! Lists in these structures can be sparse: `[false, true]` says index `1` is unknown, and
//! nothing at all about index `0`. `{"1": true}` says the same, digit-only keys address lists.
//!
//! ### Input
//!
//! All three structures are read as a [native::NativeValue], a closed set of maps, lists and
//! scalars. Map keys are plain strings no matter which format they came from (see [load]).
//! The two marking structures are wrapped in an [overlay::Overlay], which is either absent,
//! a literal `true` marking everything, or a tree.
//!
//! ### Boxing
//!
//! see [boxing::box_value]
//!
//! The result is one [value::BoxedValue] tree where each node is known, unknown, omitted, a map or
//! a list, and carries its own sensitivity flag.
//!
//! **Example**
//!
//! For the structures above:
//!
//! | **path** ([path::Path]) | **boxed**                   |
//! |-------------------------|-----------------------------|
//! | `ami`                   | known `"ami-123"`           |
//! | `id`                    | unknown                     |
//! | `tags`                  | map                         |
//! | `tags.Name`             | known `"web"`, sensitive    |
//!
//! Boxing is two passes over one tree:
//! 1. all paths the unknown overlay marks `true` are written as unknown
//! 2. all leaf paths of the object are written as known
//!
//! A position that was already written is never overwritten, which is how an unknown marking wins
//! over a known value at the same path. Writing to a list index beyond its end pads the list with
//! omitted slots first.
//!
//! Sensitivity is looked up for the exact path of every node that gets created. A `true` at a map
//! in the sensitive overlay flags that map, but not what is inside it. Only a sensitive overlay of
//! `true` at the root flags everything.
//!
//! ### Mismatched shapes
//!
//! Overlays do not have to match the object. Looking up a path that does not fit a structure
//! (a key on a list, anything below a scalar) finds nothing, and writing a path that does not fit
//! the tree built so far is skipped. Both are logged at `trace` level.
//!
pub mod boxing;
pub mod load;
pub mod native;
pub mod overlay;
pub mod path;
pub mod value;
mod visit;

pub use boxing::{box_native, box_value};
pub use native::{NativeValue, Scalar};
pub use overlay::{Overlay, OverlayError};
pub use path::{Path, Step};
pub use value::BoxedValue;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
