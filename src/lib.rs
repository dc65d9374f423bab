#![forbid(unsafe_code)]

pub use fndi_core::{
    assert_fn, fn_path, fn_path_of_val, inject, AssertError, Func, InjectError, Injectable,
    Outputs, Provide, TypeInfo, Value, ValueBuilder,
};

#[cfg(feature = "derive")]
pub use fndi_macros::Provide;

mod providers;

pub use providers::Providers;

/// Erase `func` and wrap it in a callable [`Value`].
///
/// Shorthand for `Value::new(Func::new(func))`.
#[inline(always)]
pub fn callable<F, Args>(func: F) -> Value
where
    F: Injectable<Args>,
    Args: 'static,
{
    Value::new(Func::new(func))
}
