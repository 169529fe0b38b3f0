use log::trace;

use crate::parser::ReferencePath;
use crate::runner::ds::error::DqError;
use crate::runner::ds::function_object::FunctionRef;
use crate::runner::ds::value::DqValue;

/// A present value found at a reference path.
#[derive(Debug, Clone)]
pub struct Located {
    /// The value at the full path.
    pub value: DqValue,
    /// The object holding `value`.
    pub base: DqValue,
    /// Index into the candidate list of the context that matched.
    pub context_index: usize,
}

/// A callable found at a reference path, paired with its receiver.
#[derive(Debug, Clone)]
pub struct ResolvedReference {
    pub function: FunctionRef,
    pub receiver: DqValue,
    pub context_index: usize,
}

impl ResolvedReference {
    pub fn call(&self, args: Vec<DqValue>) -> Result<DqValue, DqError> {
        self.function.call(self.receiver.clone(), args)
    }
}

/// Walk `path` from `root`. Every enclosing step must be a present object.
fn walk(root: &DqValue, path: &ReferencePath) -> Option<(DqValue, DqValue)> {
    let (parents, leaf) = path.split_leaf();
    let mut base = root.clone();
    for segment in parents {
        base = base.get_member(segment)?;
    }
    let value = base.get_member(leaf)?;
    Some((value, base))
}

/// Find the highest-priority context holding a present value at `path`.
///
/// Contexts are searched from last to first. The value may be of any kind;
/// see [`resolve`] for the callable-only variant.
pub fn lookup(path: &ReferencePath, contexts: &[DqValue]) -> Option<Located> {
    contexts
        .iter()
        .enumerate()
        .rev()
        .find_map(|(context_index, root)| {
            walk(root, path).map(|(value, base)| Located {
                value,
                base,
                context_index,
            })
        })
}

/// Resolve `path` to a callable and its receiver.
///
/// The first context (in reverse order) where the path is present decides
/// the outcome: if the value there is not callable, resolution fails rather
/// than falling through to lower-priority contexts.
pub fn resolve(path: &ReferencePath, contexts: &[DqValue]) -> Option<ResolvedReference> {
    let located = match lookup(path, contexts) {
        Some(located) => located,
        None => {
            trace!("{} is not present in any of {} contexts", path, contexts.len());
            return None;
        }
    };

    match located.value {
        DqValue::Function(function) => Some(ResolvedReference {
            function,
            receiver: located.base,
            context_index: located.context_index,
        }),
        other => {
            trace!("{} resolved to a {}, not a function", path, other.type_name());
            None
        }
    }
}

/// Resolve `path` and call it with `args`, receiver bound to its namespace.
pub fn invoke(
    path: &ReferencePath,
    contexts: &[DqValue],
    args: Vec<DqValue>,
) -> Result<DqValue, DqError> {
    let resolved = resolve(path, contexts)
        .ok_or_else(|| DqError::ReferenceNotFound(path.as_str().to_string()))?;
    trace!(
        "invoking {} from context {} with {} args",
        path,
        resolved.context_index,
        args.len()
    );
    resolved.call(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::object::OrdinaryNamespace;

    fn path(source: &str) -> ReferencePath {
        ReferencePath::parse(source).unwrap()
    }

    fn echo_this(this: DqValue, _args: Vec<DqValue>) -> Result<DqValue, DqError> {
        Ok(this)
    }

    #[test]
    fn test_walk_nested() {
        let sub = OrdinaryNamespace::new().with_method("method", echo_this).into_value();
        let root = OrdinaryNamespace::new()
            .with_member("module", OrdinaryNamespace::new().with_member("sub", sub.clone()))
            .into_value();

        let (value, base) = walk(&root, &path("module.sub.method")).unwrap();
        assert!(value.is_callable());
        assert_eq!(base, sub);
    }

    #[test]
    fn test_walk_stops_at_missing_step() {
        let root = OrdinaryNamespace::new().with_member("module", 1).into_value();
        assert!(walk(&root, &path("module.method")).is_none());
        assert!(walk(&root, &path("other.method")).is_none());
    }

    #[test]
    fn test_lookup_returns_falsy_leaf() {
        let root = OrdinaryNamespace::new().with_member("zero", 0).into_value();
        let located = lookup(&path("zero"), &[root]).unwrap();
        assert_eq!(located.value, DqValue::from(0));
        assert_eq!(located.context_index, 0);
    }

    #[test]
    fn test_resolve_rejects_non_callable() {
        let root = OrdinaryNamespace::new().with_member("name", "x").into_value();
        assert!(resolve(&path("name"), &[root]).is_none());
    }

    #[test]
    fn test_non_callable_does_not_fall_through() {
        let global = OrdinaryNamespace::new().with_method("target", echo_this).into_value();
        let namespaces = OrdinaryNamespace::new().with_member("target", false).into_value();
        assert!(resolve(&path("target"), &[global.clone()]).is_some());
        assert!(resolve(&path("target"), &[global, namespaces]).is_none());
    }

    #[test]
    fn test_invoke_missing_names_path() {
        let err = invoke(&path("missing.method"), &[DqValue::new_object()], vec![]).unwrap_err();
        assert_eq!(err, DqError::ReferenceNotFound("missing.method".to_string()));
    }
}
