//! # dq - deferred-call dispatch queue
//!
//! Record calls to methods that have not loaded yet, by name, and run them
//! once they have:
//! - Calls are written as dot-delimited reference paths (`module.method`)
//!   plus arguments and appended to a queue
//! - `drain` resolves and invokes everything queued, in order
//! - From then on the queue dispatches each append immediately
//!
//! This removes the need for callers to know in which order independently
//! loaded code becomes available.
//!
//! ## Quick Start
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use dq::runner::ds::{DqValue, OrdinaryNamespace};
//! use dq::runner::queue::{drain, DrainConfig};
//! use dq::runner::resolution::GlobalContext;
//!
//! let global = GlobalContext::new();
//!
//! // Early callers: the `_q` slot is created on first use.
//! let q = global.queue_slot("_q");
//! q.push("log", vec![DqValue::from(1)]).unwrap();
//! q.push("log", vec![DqValue::from(2)]).unwrap();
//!
//! // The module providing `log` loads.
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let module = OrdinaryNamespace::new().with_closure("log", move |_this, args| {
//!     sink.borrow_mut().push(args[0].clone());
//!     Ok(DqValue::Undefined)
//! });
//!
//! drain(DrainConfig::new(global.clone()).with_namespaces(module)).unwrap();
//! assert_eq!(*seen.borrow(), vec![DqValue::from(1), DqValue::from(2)]);
//!
//! // Later appends run straight away.
//! q.push("log", vec![DqValue::from(3)]).unwrap();
//! assert_eq!(seen.borrow().len(), 3);
//! ```
//!
//! ## Resolution Order
//!
//! A reference is looked up in `[global root, namespaces]`, last first, so
//! a namespace member shadows a global member of the same name:
//!
//! ```text
//! "module.sub.method"
//!      ↓
//! 1. namespaces.module.sub.method present? → call with this = namespaces.module.sub
//! 2. global.module.sub.method present?     → call with this = global.module.sub
//! 3. otherwise                             → DqError::ReferenceNotFound
//! ```
//!
//! A member counts as present unless it is missing or `undefined`; falsy
//! values such as `0` or `""` are present (and, not being callable, make
//! the reference fail instead of falling back to the global root).
//!
//! ## Threading
//!
//! Everything is single-threaded and synchronous. Handles are `Rc`-based
//! and neither `Send` nor `Sync`.
//!
//! ## Architecture
//!
//! - **[`parser`]** - pest grammar for reference paths
//! - **[`runner`]** - values, resolution and the drain engine
//!   - **[`runner::ds`]** - values, namespaces, callables, errors
//!   - **[`runner::resolution`]** - resolver and global context
//!   - **[`runner::queue`]** - entries, queues, `drain`, `Dispatcher`

pub mod parser;
pub mod runner;
