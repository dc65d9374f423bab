use std::any::type_name;

use crate::{AssertError, Func, InjectError, Value};

/// Resolve `providers` into the argument list of `callable`, then call it.
///
/// Every parameter is bound to the first provider in `providers` that is assignable to its type.
/// When more than one provider would fit, the earliest one wins. If no provider fits some
/// parameter, the callable is never called and the index of that parameter is reported.
///
/// Errors returned by the callable itself are ordinary return values and end up in the returned
/// list, untouched.
///
/// ```
/// # use fndi::{inject, Func, InjectError, Value};
/// #[derive(Clone)]
/// struct Name(&'static str);
///
/// let greet = Value::new(Func::new(|name: Name| (format!("hello {}", name.0),)));
///
/// let results = inject(&greet, &[Value::new(Name("world"))]).unwrap();
/// assert_eq!(results[0].downcast_ref::<String>().unwrap(), "hello world");
///
/// let err = inject(&greet, &[]).unwrap_err();
/// assert!(matches!(err, InjectError::MissingProvider { index: 0, .. }));
/// ```
pub fn inject(callable: &Value, providers: &[Value]) -> Result<Vec<Value>, InjectError> {
    let func = callable
        .downcast_ref::<Func>()
        .ok_or_else(|| InjectError::NotCallable {
            found: callable.type_name(),
        })?;

    func.inject(providers)
}

/// Check that `callable` is a function, and that it returns values of the same types as
/// `expected`, in the same order.
///
/// A return type matches when the exemplar at the same position is assignable to it. Passing
/// `None` skips the return type check.
///
/// ```
/// # use fndi::{assert_fn, AssertError, Func, Value};
/// let parse = Value::new(Func::new(|| (0_u32, String::new())));
///
/// assert!(assert_fn(&parse, Some(&[Value::new(1_u32), Value::new(String::new())])).is_ok());
/// assert!(assert_fn(&parse, None).is_ok());
///
/// let err = assert_fn(&Value::new("parse"), None).unwrap_err();
/// assert!(matches!(err, AssertError::NotCallable { .. }));
/// ```
pub fn assert_fn(callable: &Value, expected: Option<&[Value]>) -> Result<(), AssertError> {
    let func = callable
        .downcast_ref::<Func>()
        .ok_or_else(|| AssertError::NotCallable {
            found: callable.type_name(),
        })?;

    func.assert_returns(expected)
}

/// Find the first provider assignable to `T` and produce a `T` from it
pub(crate) fn resolve<T: Clone + 'static>(providers: &[Value], index: usize) -> Option<T> {
    let resolved = providers.iter().find_map(|provider| {
        let arg = provider.extract::<T>()?;
        tracing::trace!(
            index,
            parameter = type_name::<T>(),
            provider = provider.type_name(),
            "resolved parameter"
        );
        Some(arg)
    });

    if resolved.is_none() {
        tracing::debug!(index, parameter = type_name::<T>(), "no provider for parameter");
    }

    resolved
}
