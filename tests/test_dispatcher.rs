//! Tests for the object-style `Dispatcher`.

extern crate dq;

use dq::runner::ds::{DqError, DqValue, FunctionObject, OrdinaryNamespace};
use dq::runner::queue::Dispatcher;
use dq::runner::resolution::GlobalContext;
use std::cell::RefCell;
use std::rc::Rc;

type History = Rc<RefCell<Vec<(String, Vec<DqValue>)>>>;

/// A `foo` object whose `bar`, `baz` and `qux` methods record their calls.
fn stump_object(history: &History) -> DqValue {
    let mut foo = OrdinaryNamespace::new();
    for name in &["bar", "baz", "qux"] {
        let history = history.clone();
        let method = name.to_string();
        foo = foo.with_closure(name, move |_this, args| {
            history.borrow_mut().push((method.clone(), args));
            Ok(DqValue::Undefined)
        });
    }
    foo.into_value()
}

fn names(history: &History) -> Vec<String> {
    history.borrow().iter().map(|(name, _)| name.clone()).collect()
}

fn setup() -> (Dispatcher, History) {
    let history: History = Rc::new(RefCell::new(Vec::new()));
    (Dispatcher::new(stump_object(&history)), history)
}

#[test]
fn test_processes_references_on_dispatch() {
    let (dispatcher, history) = setup();
    dispatcher.add("bar", vec![]).unwrap();
    dispatcher.dispatch().unwrap();
    assert_eq!(names(&history), vec!["bar".to_string()]);
}

#[test]
fn test_waits_until_dispatch_to_process_references() {
    let (dispatcher, history) = setup();
    dispatcher.add("bar", vec![]).unwrap();
    assert!(history.borrow().is_empty());
    assert_eq!(dispatcher.pending(), 1);
    assert!(!dispatcher.is_dispatched());
}

#[test]
fn test_processes_references_in_order_added() {
    let (dispatcher, history) = setup();
    dispatcher.add("baz", vec![]).unwrap();
    dispatcher.add("qux", vec![]).unwrap();
    dispatcher.add("bar", vec![]).unwrap();
    dispatcher.dispatch().unwrap();
    assert_eq!(
        names(&history),
        vec!["baz".to_string(), "qux".to_string(), "bar".to_string()]
    );
}

#[test]
fn test_applies_arguments_during_dispatch() {
    let (dispatcher, history) = setup();
    let three = OrdinaryNamespace::new().with_member("three", 3).into_value();
    dispatcher
        .add(
            "bar",
            vec![DqValue::from(1), DqValue::from("two"), three.clone()],
        )
        .unwrap();
    dispatcher.dispatch().unwrap();
    assert_eq!(
        history.borrow()[0].1,
        vec![DqValue::from(1), DqValue::from("two"), three]
    );
}

#[test]
fn test_immediately_processes_post_dispatch_additions() {
    let (dispatcher, history) = setup();
    dispatcher.dispatch().unwrap();
    assert!(history.borrow().is_empty());

    dispatcher.add("bar", vec![]).unwrap();
    assert_eq!(names(&history), vec!["bar".to_string()]);
    assert_eq!(dispatcher.pending(), 0);
}

#[test]
fn test_dispatches_only_once() {
    let (dispatcher, history) = setup();
    dispatcher.add("bar", vec![]).unwrap();
    dispatcher.dispatch().unwrap();
    dispatcher.dispatch().unwrap();
    assert_eq!(history.borrow().len(), 1);
}

#[test]
fn test_throws_error_when_dispatching_undeclared_methods() {
    let (dispatcher, _history) = setup();
    dispatcher.add("bork", vec![]).unwrap();
    let err = dispatcher.dispatch().unwrap_err();
    assert!(err.to_string().contains("No such method: bork"));
}

#[test]
fn test_rejects_non_string_references() {
    let (dispatcher, _history) = setup();
    let err = dispatcher.add(DqValue::Null, vec![]).unwrap_err();
    assert!(matches!(err, DqError::InvalidReferenceType(_)));
    assert_eq!(dispatcher.pending(), 0);
}

#[test]
fn test_only_searches_its_own_context() {
    let global = GlobalContext::new();
    let called = Rc::new(RefCell::new(false));
    let flag = called.clone();
    global.define(
        "hello",
        FunctionObject::closure("hello", move |_this, _args| {
            *flag.borrow_mut() = true;
            Ok(DqValue::Undefined)
        }),
    );

    let scoped = Dispatcher::new(DqValue::new_object());
    scoped.add("hello", vec![]).unwrap();
    assert!(scoped.dispatch().is_err());
    assert!(!*called.borrow());

    let global_dispatcher = Dispatcher::with_global(&global);
    global_dispatcher.add("hello", vec![]).unwrap();
    global_dispatcher.dispatch().unwrap();
    assert!(*called.borrow());
}

#[test]
fn test_failed_dispatch_still_switches_to_immediate_mode() {
    let (dispatcher, history) = setup();
    dispatcher.add("bork", vec![]).unwrap();
    dispatcher.add("baz", vec![]).unwrap();

    let err = dispatcher.dispatch().unwrap_err();
    assert_eq!(err, DqError::ReferenceNotFound("bork".to_string()));
    assert!(dispatcher.is_dispatched());

    dispatcher.add("bar", vec![]).unwrap();
    assert_eq!(names(&history), vec!["bar".to_string()]);

    // References behind the failing one are never processed.
    dispatcher.dispatch().unwrap();
    assert_eq!(names(&history), vec!["bar".to_string()]);
    assert_eq!(dispatcher.pending(), 1);
}

#[test]
fn test_methods_are_called_on_the_dispatcher_context() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let context = OrdinaryNamespace::new()
        .with_member(
            "cat",
            OrdinaryNamespace::new().with_closure("meow", move |this, _args| {
                sink.borrow_mut().push(this);
                Ok(DqValue::Undefined)
            }),
        )
        .into_value();

    let pool = Dispatcher::new(context.clone());
    pool.add("cat.meow", vec![]).unwrap();
    pool.dispatch().unwrap();
    pool.add("cat.meow", vec![]).unwrap();

    assert_eq!(*seen.borrow(), vec![context.clone(), context]);
}
