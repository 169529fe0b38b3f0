//! Reference resolution across candidate namespaces.
//!
//! A reference such as `module.sub.method` is looked up in an ordered list
//! of namespace values. Candidates are searched from the **last** to the
//! first, so the caller's explicit namespaces (placed after the global
//! root) win over identically named global members:
//!
//! ```text
//! contexts = [global root, namespaces]
//!                 ^             ^
//!                 |             └─ searched first
//!                 └─ fallback
//! ```
//!
//! The walk is a plain key chain over [`NamespaceObject`](crate::runner::ds::NamespaceObject)
//! members. The value found is returned together with the object holding it,
//! which becomes the receiver (`this`) when the value is invoked.

pub mod global;
pub mod resolver;

pub use global::GlobalContext;
pub use resolver::{invoke, lookup, resolve, Located, ResolvedReference};
