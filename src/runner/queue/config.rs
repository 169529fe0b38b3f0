//! Drain configuration.

use std::rc::Rc;

use crate::runner::ds::error::DqError;
use crate::runner::ds::value::DqValue;
use crate::runner::queue::entry::QueueEntry;
use crate::runner::queue::state::Queue;
use crate::runner::resolution::global::GlobalContext;
use crate::runner::resolution::resolver::invoke;

/// Slot consulted when no queue is given.
pub const DEFAULT_QUEUE_NAME: &str = "_q";

/// Turns one queued entry into a call.
pub type DispatchCallback = Rc<dyn Fn(&QueueEntry, &DispatchOptions) -> Result<DqValue, DqError>>;

/// Which queue to drain.
#[derive(Clone)]
pub enum QueueRef {
    Handle(Queue),
    /// A named slot of the [`GlobalContext`].
    Named(String),
}

impl Default for QueueRef {
    fn default() -> Self {
        QueueRef::Named(DEFAULT_QUEUE_NAME.to_string())
    }
}

impl From<Queue> for QueueRef {
    fn from(queue: Queue) -> Self {
        QueueRef::Handle(queue)
    }
}

impl From<&str> for QueueRef {
    fn from(name: &str) -> Self {
        QueueRef::Named(name.to_string())
    }
}

/// Configuration for [`drain`](super::drain::drain).
///
/// | field             | default                                  |
/// |-------------------|------------------------------------------|
/// | queue             | slot `_q` of the global context          |
/// | namespaces        | empty namespace                          |
/// | dispatch callback | resolve against `[global, namespaces]`   |
pub struct DrainConfig {
    pub global: GlobalContext,
    pub queue: QueueRef,
    pub namespaces: DqValue,
    pub dispatch_callback: Option<DispatchCallback>,
}

impl DrainConfig {
    pub fn new(global: GlobalContext) -> Self {
        DrainConfig {
            global,
            queue: QueueRef::default(),
            namespaces: DqValue::new_object(),
            dispatch_callback: None,
        }
    }

    pub fn with_queue(mut self, queue: Queue) -> Self {
        self.queue = QueueRef::Handle(queue);
        self
    }

    pub fn with_queue_name(mut self, name: &str) -> Self {
        self.queue = QueueRef::Named(name.to_string());
        self
    }

    /// Namespaces searched before the global root.
    pub fn with_namespaces(mut self, namespaces: impl Into<DqValue>) -> Self {
        self.namespaces = namespaces.into();
        self
    }

    pub fn with_dispatch_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&QueueEntry, &DispatchOptions) -> Result<DqValue, DqError> + 'static,
    {
        let callback: DispatchCallback = Rc::new(callback);
        self.dispatch_callback = Some(callback);
        self
    }

    /// Resolve the target queue and normalize the remaining options.
    pub(crate) fn into_parts(self) -> (Queue, DispatchOptions) {
        let queue = match self.queue {
            QueueRef::Handle(queue) => queue,
            QueueRef::Named(name) => self.global.queue_slot(&name),
        };
        let options = DispatchOptions::new(
            self.global.root().clone(),
            self.namespaces,
            self.dispatch_callback,
        );
        (queue, options)
    }
}

/// Normalized options: what a dispatch callback gets to see.
pub struct DispatchOptions {
    global: DqValue,
    namespaces: DqValue,
    callback: DispatchCallback,
}

impl DispatchOptions {
    pub fn new(global: DqValue, namespaces: DqValue, callback: Option<DispatchCallback>) -> Self {
        DispatchOptions {
            global,
            namespaces,
            callback: match callback {
                Some(callback) => callback,
                None => Rc::new(default_dispatch) as DispatchCallback,
            },
        }
    }

    pub fn global(&self) -> &DqValue {
        &self.global
    }

    pub fn namespaces(&self) -> &DqValue {
        &self.namespaces
    }

    /// Candidate contexts in search-list order; the last one wins ties.
    pub fn contexts(&self) -> [DqValue; 2] {
        [self.global.clone(), self.namespaces.clone()]
    }

    pub fn dispatch(&self, entry: &QueueEntry) -> Result<DqValue, DqError> {
        (self.callback)(entry, self)
    }
}

/// Resolve the entry's reference against `[global, namespaces]` and call it.
pub fn default_dispatch(entry: &QueueEntry, options: &DispatchOptions) -> Result<DqValue, DqError> {
    invoke(entry.reference(), &options.contexts(), entry.args().to_vec())
}
