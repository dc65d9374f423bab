use std::{
    fmt::{self, Debug},
    sync::Arc,
};

use crate::{fn_path, AssertError, InjectError, Injectable, Outputs, TypeInfo, Value};

type CallFn = dyn Fn(&[Value]) -> Result<Vec<Value>, InjectError> + Send + Sync;

/// A type-erased [`Injectable`] function.
///
/// A `Func` remembers the name of the function along with the types of its parameters and return
/// values, so that it can be inspected and called without knowing its concrete type. Wrapping a
/// `Func` in a [`Value`] is what makes that value callable for [`inject`](crate::inject) and
/// [`assert_fn`](crate::assert_fn).
#[derive(Clone)]
pub struct Func {
    name: &'static str,
    parameters: Arc<[TypeInfo]>,
    returns: Arc<[TypeInfo]>,
    call: Arc<CallFn>,
}

impl Func {
    /// Erase the function `func`
    pub fn new<F, Args>(func: F) -> Self
    where
        F: Injectable<Args>,
        Args: 'static,
    {
        let call = move |providers: &[Value]| {
            func.call_injected(providers)
                .map(<<F as Injectable<Args>>::Output as Outputs>::into_values)
        };

        Self {
            name: fn_path::<F>(),
            parameters: F::parameters().into(),
            returns: <<F as Injectable<Args>>::Output as Outputs>::types().into(),
            call: Arc::new(call),
        }
    }

    /// The path of the function, for diagnostics
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn parameters(&self) -> &[TypeInfo] {
        &self.parameters
    }

    #[inline(always)]
    pub fn returns(&self) -> &[TypeInfo] {
        &self.returns
    }

    /// Resolve the function's arguments from `providers` and call it.
    ///
    /// See [`inject`](crate::inject).
    pub fn inject(&self, providers: &[Value]) -> Result<Vec<Value>, InjectError> {
        tracing::debug!(
            callable = self.name,
            parameters = self.parameters.len(),
            providers = providers.len(),
            "injecting"
        );

        (self.call)(providers)
    }

    /// Check the return types of the function against `expected`.
    ///
    /// See [`assert_fn`](crate::assert_fn).
    pub fn assert_returns(&self, expected: Option<&[Value]>) -> Result<(), AssertError> {
        let expected = match expected {
            Some(expected) => expected,
            None => return Ok(()),
        };

        let matches = self.returns.len() == expected.len()
            && self
                .returns
                .iter()
                .zip(expected)
                .all(|(&ty, exemplar)| exemplar.is_assignable_to_type(ty));

        if matches {
            Ok(())
        } else {
            Err(AssertError::SignatureMismatch {
                callable: self.name,
                expected: expected.iter().map(Value::type_name).collect(),
                actual: self.returns.iter().map(TypeInfo::name).collect(),
            })
        }
    }
}

impl Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Func")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("returns", &self.returns)
            .finish_non_exhaustive()
    }
}

impl From<Func> for Value {
    #[inline(always)]
    fn from(func: Func) -> Self {
        Value::new(func)
    }
}
