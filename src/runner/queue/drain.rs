use std::rc::Rc;

use log::debug;

use crate::runner::ds::error::DqError;
use crate::runner::queue::config::DrainConfig;

/// Dispatch every call buffered in the configured queue, in the order it
/// was recorded, then make the queue dispatch future appends immediately.
///
/// Draining an already drained queue dispatches nothing again; it only
/// replaces the options used for later appends. The first failing call
/// stops the drain and its error is returned; calls dispatched before it
/// stay dispatched.
///
/// ```
/// use dq::runner::ds::{DqValue, OrdinaryNamespace};
/// use dq::runner::queue::{drain, DrainConfig};
/// use dq::runner::resolution::GlobalContext;
///
/// let global = GlobalContext::new();
/// global.queue_slot("_q").push("greeter.hello", vec![DqValue::from("world")]).unwrap();
///
/// let greeter = OrdinaryNamespace::new()
///     .with_method("hello", |_this, args| Ok(args[0].clone()));
/// drain(DrainConfig::new(global.clone()).with_namespaces(
///     OrdinaryNamespace::new().with_member("greeter", greeter),
/// ))
/// .unwrap();
///
/// assert!(global.queue_slot("_q").is_empty());
/// ```
pub fn drain(config: DrainConfig) -> Result<(), DqError> {
    let (queue, options) = config.into_parts();
    let dispatched = queue.drain_with(Rc::new(options))?;
    debug!("drain of queue {} dispatched {} entries", queue.id(), dispatched);
    Ok(())
}
