//! The default namespace searched after the caller's explicit namespaces.
//!
//! Hosts create one `GlobalContext` at start-up and pass it to every
//! [`DrainConfig`](crate::runner::queue::DrainConfig). It plays the role of
//! the global object: loaded modules are defined on its root, and
//! pre-load callers find their shared queue in one of its named slots.
//!
//! ```
//! use dq::runner::resolution::GlobalContext;
//! use dq::runner::ds::DqValue;
//!
//! let global = GlobalContext::new();
//!
//! // Before the module loads: record the call in the default slot.
//! global.queue_slot("_q").push("cat.meow", vec![]).unwrap();
//! assert_eq!(global.queue_slot("_q").len(), 1);
//!
//! // Later the module shows up on the root.
//! global.define("cat", DqValue::new_object());
//! assert!(global.root().get_member("cat").is_some());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::runner::ds::object::{ObjectRef, OrdinaryNamespace};
use crate::runner::ds::value::DqValue;
use crate::runner::queue::Queue;

/// Shared handle to the global root namespace and the named queue slots.
///
/// Clones share state. Not thread-safe; the whole dispatch core is
/// single-threaded.
#[derive(Clone)]
pub struct GlobalContext {
    root: DqValue,
    slots: Rc<RefCell<HashMap<String, Queue>>>,
}

impl GlobalContext {
    pub fn new() -> Self {
        Self::with_root(OrdinaryNamespace::new().into_ref())
    }

    /// Use an existing namespace object as the global root.
    pub fn with_root(root: ObjectRef) -> Self {
        GlobalContext {
            root: DqValue::Object(root),
            slots: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn root(&self) -> &DqValue {
        &self.root
    }

    /// Define (or replace) a global member. Returns false if the root
    /// namespace refuses the write.
    pub fn define(&self, name: &str, value: impl Into<DqValue>) -> bool {
        self.root.set_member(name, value.into())
    }

    /// The queue in slot `name`, created empty on first use.
    pub fn queue_slot(&self, name: &str) -> Queue {
        self.slots
            .borrow_mut()
            .entry(name.to_string())
            .or_insert_with(|| {
                let queue = Queue::new();
                debug!("created queue {} in slot {:?}", queue.id(), name);
                queue
            })
            .clone()
    }

    /// Put `queue` into slot `name`, returning the queue it replaces.
    pub fn install_queue(&self, name: &str, queue: Queue) -> Option<Queue> {
        debug!("installing queue {} in slot {:?}", queue.id(), name);
        self.slots.borrow_mut().insert(name.to_string(), queue)
    }

    pub fn has_queue(&self, name: &str) -> bool {
        self.slots.borrow().contains_key(name)
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
