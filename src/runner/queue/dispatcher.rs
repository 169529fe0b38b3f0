//! Object-style front end over a private queue.
//!
//! A `Dispatcher` is bound to one context at construction. References are
//! resolved only there, with no separate namespaces to prefer.
//!
//! ```
//! use dq::runner::ds::{DqValue, FunctionObject, OrdinaryNamespace};
//! use dq::runner::queue::Dispatcher;
//!
//! let cat = DqValue::new_object();
//! let pool = Dispatcher::new(OrdinaryNamespace::new().with_member("cat", cat.clone()));
//! pool.add("cat.meow", vec![]).unwrap();
//!
//! // Some time later the method is declared...
//! let meow = FunctionObject::native("meow", |_this, _args| Ok(DqValue::from("Meow.")));
//! cat.set_member("meow", meow.into());
//!
//! // ...after which the pool is dispatched.
//! pool.dispatch().unwrap();
//! assert!(pool.is_dispatched());
//! ```

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::runner::ds::error::DqError;
use crate::runner::ds::value::DqValue;
use crate::runner::queue::config::{DispatchCallback, DispatchOptions};
use crate::runner::queue::entry::QueueEntry;
use crate::runner::queue::state::Queue;
use crate::runner::resolution::global::GlobalContext;
use crate::runner::resolution::resolver::lookup;

/// Calls the referenced method with the dispatcher's context as receiver,
/// whatever namespace the method was found in.
fn call_with_context(entry: &QueueEntry, options: &DispatchOptions) -> Result<DqValue, DqError> {
    let reference = entry.reference();
    let method = lookup(reference, std::slice::from_ref(options.global()))
        .and_then(|located| located.value.as_function().cloned())
        .ok_or_else(|| DqError::ReferenceNotFound(reference.as_str().to_string()))?;
    method.call(options.global().clone(), entry.args().to_vec())
}

pub struct Dispatcher {
    queue: Queue,
    options: Rc<DispatchOptions>,
    dispatched: Cell<bool>,
}

impl Dispatcher {
    /// A dispatcher resolving references inside `context`.
    pub fn new(context: impl Into<DqValue>) -> Self {
        let callback: DispatchCallback = Rc::new(call_with_context);
        Dispatcher {
            queue: Queue::new(),
            options: Rc::new(DispatchOptions::new(
                context.into(),
                DqValue::Undefined,
                Some(callback),
            )),
            dispatched: Cell::new(false),
        }
    }

    /// A dispatcher resolving against the global root.
    pub fn with_global(global: &GlobalContext) -> Self {
        Self::new(global.root().clone())
    }

    /// Add a reference, called with `args`. Non-string references are
    /// rejected. After [`dispatch`](Self::dispatch) the call is made at once.
    pub fn add(&self, reference: impl Into<DqValue>, args: Vec<DqValue>) -> Result<(), DqError> {
        let mut values = Vec::with_capacity(args.len() + 1);
        values.push(reference.into());
        values.extend(args);
        if !self.dispatched.get() {
            return self.queue.push_values(values);
        }
        let entry = QueueEntry::from_values(values)?;
        self.options.dispatch(&entry).map(|_| ())
    }

    /// Process every added reference, in the order added.
    ///
    /// Runs at most once, even when a reference fails: entries after the
    /// failing one are never processed, and later additions are made at
    /// once.
    pub fn dispatch(&self) -> Result<(), DqError> {
        if self.dispatched.replace(true) {
            return Ok(());
        }
        self.queue.drain_with(self.options.clone()).map(|_| ()).map_err(|e| {
            debug!(
                "dispatcher {} failed, {} references left unprocessed",
                self.queue.id(),
                self.queue.len()
            );
            e
        })
    }

    pub fn is_dispatched(&self) -> bool {
        self.dispatched.get()
    }

    /// References added but not yet processed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
