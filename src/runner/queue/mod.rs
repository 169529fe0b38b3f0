//! Queue drain engine.
//!
//! Calls are recorded as [`QueueEntry`] values before the code they refer
//! to has loaded. [`drain`] later dispatches them in order and flips the
//! [`Queue`] into immediate mode, after which every append is dispatched
//! synchronously:
//!
//! ```text
//!   Buffering ──drain──> Draining ──all dispatched──> Immediate
//!       ^                    │
//!       └──── call failed ───┘   (remaining entries stay queued)
//! ```
//!
//! [`Dispatcher`] offers the same behaviour behind an `add`/`dispatch`
//! object bound to a single context.

pub mod config;
pub mod dispatcher;
pub mod drain;
pub mod entry;
pub mod state;

pub use config::{
    default_dispatch, DispatchCallback, DispatchOptions, DrainConfig, QueueRef, DEFAULT_QUEUE_NAME,
};
pub use dispatcher::Dispatcher;
pub use drain::drain;
pub use entry::QueueEntry;
pub use state::{Queue, QueueMode};
