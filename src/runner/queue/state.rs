use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace};
use uuid::Uuid;

use crate::runner::ds::error::DqError;
use crate::runner::ds::value::DqValue;
use crate::runner::queue::config::DispatchOptions;
use crate::runner::queue::entry::QueueEntry;

/// Observable state of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Appends are stored, nothing is dispatched.
    Buffering,
    /// A drain is running; appends are stored and picked up by that drain.
    Draining,
    /// Appends are dispatched before `enqueue` returns. Terminal.
    Immediate,
}

enum Mode {
    Buffering,
    Draining,
    Immediate(Rc<DispatchOptions>),
}

struct QueueState {
    id: Uuid,
    mode: Mode,
    entries: VecDeque<QueueEntry>,
}

/// A call queue with a buffering/immediate mode flag.
///
/// Cloning yields another handle to the same queue. Nothing here is
/// thread-safe: all dispatch happens synchronously on the caller's thread.
///
/// No borrow of the queue is held while a callable runs, so callables may
/// append to the very queue that dispatched them.
#[derive(Clone)]
pub struct Queue {
    state: Rc<RefCell<QueueState>>,
}

impl Queue {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// A queue pre-populated by earlier callers.
    pub fn with_entries(entries: Vec<QueueEntry>) -> Self {
        Queue {
            state: Rc::new(RefCell::new(QueueState {
                id: Uuid::new_v4(),
                mode: Mode::Buffering,
                entries: entries.into_iter().collect(),
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.state.borrow().id
    }

    pub fn mode(&self) -> QueueMode {
        match self.state.borrow().mode {
            Mode::Buffering => QueueMode::Buffering,
            Mode::Draining => QueueMode::Draining,
            Mode::Immediate(_) => QueueMode::Immediate,
        }
    }

    /// Number of entries waiting to be dispatched.
    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    pub fn same_queue(&self, other: &Queue) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Append a call. Once the queue has been drained the call is
    /// dispatched right away and its error, if any, is returned here.
    pub fn enqueue(&self, entry: QueueEntry) -> Result<(), DqError> {
        let options = {
            let mut state = self.state.borrow_mut();
            let immediate = match &state.mode {
                Mode::Immediate(options) => Some(options.clone()),
                Mode::Buffering | Mode::Draining => None,
            };
            match immediate {
                Some(options) => options,
                None => {
                    trace!("queue {} buffering {}", state.id, entry.reference());
                    state.entries.push_back(entry);
                    return Ok(());
                }
            }
        };
        trace!("queue {} dispatching {} immediately", self.id(), entry.reference());
        options.dispatch(&entry).map(|_| ())
    }

    /// Append `reference` called with `args`.
    pub fn push(&self, reference: &str, args: Vec<DqValue>) -> Result<(), DqError> {
        self.enqueue(QueueEntry::new(reference, args)?)
    }

    /// Append a call record whose first element is the reference.
    pub fn push_values(&self, values: Vec<DqValue>) -> Result<(), DqError> {
        self.enqueue(QueueEntry::from_values(values)?)
    }

    /// Dispatch everything buffered, then switch to immediate mode.
    ///
    /// Entries buffered by callables while the drain runs are dispatched by
    /// the same drain, after the ones already waiting. On the first failing
    /// entry the drain stops: that entry is consumed, the rest go back to
    /// the front of the queue, and a queue that was never drained returns
    /// to buffering so a later drain can resume.
    ///
    /// Returns the number of entries dispatched.
    pub(crate) fn drain_with(&self, options: Rc<DispatchOptions>) -> Result<usize, DqError> {
        let (id, was_immediate, mut batch) = {
            let mut state = self.state.borrow_mut();
            let was_immediate = match state.mode {
                Mode::Draining => {
                    debug!("queue {} is already draining", state.id);
                    return Ok(0);
                }
                Mode::Immediate(_) => true,
                Mode::Buffering => false,
            };
            state.mode = Mode::Draining;
            (state.id, was_immediate, std::mem::take(&mut state.entries))
        };
        debug!("draining queue {} ({} entries)", id, batch.len());

        let mut dispatched = 0;
        loop {
            while let Some(entry) = batch.pop_front() {
                trace!("queue {} dispatching {}", id, entry.reference());
                if let Err(e) = options.dispatch(&entry) {
                    let mut state = self.state.borrow_mut();
                    batch.append(&mut state.entries);
                    state.entries = batch;
                    state.mode = if was_immediate {
                        Mode::Immediate(options.clone())
                    } else {
                        Mode::Buffering
                    };
                    debug!(
                        "queue {} stopped at {} after {} entries, {} left: {}",
                        id,
                        entry.reference(),
                        dispatched,
                        state.entries.len(),
                        e
                    );
                    return Err(e);
                }
                dispatched += 1;
            }

            let mut state = self.state.borrow_mut();
            if state.entries.is_empty() {
                state.mode = Mode::Immediate(options.clone());
                break;
            }
            batch = std::mem::take(&mut state.entries);
        }

        debug!(
            "queue {} drained {} entries, dispatching immediately from now on",
            id, dispatched
        );
        Ok(dispatched)
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue({}, {:?}, {} pending)", self.id(), self.mode(), self.len())
    }
}
