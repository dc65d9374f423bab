use std::any::Any;

use crate::{InjectError, TypeInfo, Value, ValueBuilder};

/// A function whose arguments can be resolved from a pool of providers.
///
/// This is implemented for every `Fn` of up to nine arguments where each argument is
/// [`Clone`] + `'static` and the return type implements [`Outputs`]. `Args` is a tuple of the
/// argument types, and only exists to keep the implementations for different arities apart.
///
/// ```
/// # use fndi::{Injectable, Value};
/// #[derive(Clone)]
/// struct Port(u16);
///
/// let listen = |port: Port, host: &'static str| (format!("{host}:{}", port.0),);
///
/// let providers = [Value::new("localhost"), Value::new(Port(8080))];
/// let (addr,) = listen.call_injected(&providers).unwrap();
/// assert_eq!(addr, "localhost:8080");
/// ```
///
/// Only [`Fn`] functions are injectable, so that a [`Func`](crate::Func) can be shared and called
/// through a shared reference. A closure that mutates its captures is an [`FnMut`] and is
/// rejected; keep such state behind an atomic or a lock instead:
/// ```compile_fail
/// # use fndi::callable;
/// let mut ran = false;
/// callable(move || {
///     ran = true;
/// });
/// ```
pub trait Injectable<Args>: Send + Sync + 'static {
    /// The values returned by the function
    type Output: Outputs;

    /// The types of the function's parameters, in declaration order
    fn parameters() -> Vec<TypeInfo>;

    /// Resolve every parameter from `providers`, then call the function.
    ///
    /// Each parameter is bound to the first provider assignable to its type. If some parameter
    /// cannot be resolved, the function is not called.
    fn call_injected(&self, providers: &[Value]) -> Result<Self::Output, InjectError>;
}

/// The list of values returned by an [`Injectable`] function.
///
/// Implemented for `()`, which returns nothing, and for tuples of up to nine values. A function
/// with a single return value returns a one-element tuple.
pub trait Outputs: 'static {
    /// The types of the returned values, in order
    fn types() -> Vec<TypeInfo>;

    /// Erase the returned values, keeping their order
    fn into_values(self) -> Vec<Value>;
}

/// A type that declares which other types its [`Value`]s can stand in for.
///
/// In most cases this is derived, listing the traits a provider should be usable as:
/// ```
/// # use fndi::{Provide, Value};
/// # use std::sync::Arc;
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// #[derive(Clone, Provide)]
/// #[provide(Clock)]
/// struct Frozen(u64);
///
/// impl Clock for Frozen {
///     fn now(&self) -> u64 {
///         self.0
///     }
/// }
///
/// let value = Value::provide(Frozen(42));
/// assert_eq!(value.extract::<Arc<dyn Clock>>().unwrap().now(), 42);
/// ```
pub trait Provide: Any + Send + Sync + Sized {
    /// Register views on the builder. The default registers none.
    #[inline(always)]
    fn views(builder: ValueBuilder<Self>) -> ValueBuilder<Self> {
        builder
    }
}
