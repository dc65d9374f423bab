use std::{
    any::Any,
    ops::{Deref, DerefMut},
};

use fndi_core::{Provide, Value};

/// An ordered pool of providers
///
/// Order matters: when several providers can be assigned to the same parameter, the one added
/// first is used.
///
/// ```
/// # use fndi::{inject, Func, Providers, Value};
/// # use std::sync::Arc;
/// trait Shout: Send + Sync {
///     fn shout(&self, word: &str) -> String;
/// }
///
/// struct Loud;
///
/// impl Shout for Loud {
///     fn shout(&self, word: &str) -> String {
///         word.to_uppercase()
///     }
/// }
///
/// let providers = Providers::new()
///     .with("hey")
///     .with(Arc::new(Loud) as Arc<dyn Shout>);
///
/// let shout = Value::new(Func::new(|s: Arc<dyn Shout>, word: &'static str| (s.shout(word),)));
/// let results = inject(&shout, &providers).unwrap();
/// assert_eq!(results[0].downcast_ref::<String>().unwrap(), "HEY");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Providers {
    values: Vec<Value>,
}

impl Providers {
    /// Create an empty pool
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the pool
    #[inline(always)]
    pub fn with<T: Any + Send + Sync>(self, value: T) -> Self {
        self.with_value(Value::new(value))
    }

    /// Append `value` to the pool, along with the views declared by its [`Provide`]
    /// implementation
    #[inline(always)]
    pub fn with_provided<T: Provide>(self, value: T) -> Self {
        self.with_value(Value::provide(value))
    }

    /// Append an already erased value, like one from a [`ValueBuilder`](fndi_core::ValueBuilder)
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append an already erased value
    #[inline(always)]
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    #[inline(always)]
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl Deref for Providers {
    type Target = [Value];

    #[inline(always)]
    fn deref(&self) -> &[Value] {
        &self.values
    }
}

impl DerefMut for Providers {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }
}

impl From<Vec<Value>> for Providers {
    #[inline(always)]
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Providers {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<Value> for Providers {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
