//! Runtime side: values, resolution and the drain engine.
//!
//! - **[`ds`]** - dynamic values, namespace objects, callables, errors
//! - **[`resolution`]** - dot-path lookup across prioritized namespaces
//! - **[`queue`]** - queue entries, the queue itself, `drain`

pub mod ds;
pub mod queue;
pub mod resolution;
