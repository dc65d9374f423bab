use std::{
    any::{type_name, Any, TypeId},
    fmt::{self, Debug, Display},
    sync::Arc,
};

use crate::Provide;

/// The identity of a rust type at runtime, along with a printable name for it
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Describe the type `T`
    #[inline(always)]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

type Erased = dyn Any + Send + Sync;

type CastFn = dyn Fn(&Erased) -> Option<Box<dyn Any>> + Send + Sync;

/// A conversion from the type of a [`Value`] to some other type it can stand in for
#[derive(Clone)]
struct View {
    target: TypeInfo,
    cast: Arc<CastFn>,
}

/// A type-erased value, used as a provider, an exemplar or a call result.
///
/// Cloning a value is cheap: clones share the underlying data.
///
/// A value is assignable to the type `T` when it either holds a `T`, or a view to `T` has been
/// registered for it through a [`ValueBuilder`]. Views are how a concrete provider satisfies a
/// trait object parameter:
/// ```
/// # use fndi::Value;
/// # use std::sync::Arc;
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// #[derive(Clone)]
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".into()
///     }
/// }
///
/// let value = Value::build(English)
///     .view(|english: &English| -> Arc<dyn Greeter> { Arc::new(english.clone()) })
///     .finish();
///
/// assert!(value.is::<English>());
/// assert!(value.is_assignable_to::<Arc<dyn Greeter>>());
/// assert_eq!(value.extract::<Arc<dyn Greeter>>().unwrap().greet(), "hello");
/// ```
#[derive(Clone)]
pub struct Value {
    ty: TypeInfo,
    inner: Arc<Erased>,
    views: Arc<[View]>,
}

impl Value {
    /// Wrap `value` without any views.
    ///
    /// Wrapping a `Value` returns it as is, views included.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        let inner: Arc<Erased> = Arc::new(value);
        match inner.downcast::<Value>() {
            Ok(value) => Arc::try_unwrap(value).unwrap_or_else(|shared| (*shared).clone()),
            Err(inner) => Self {
                ty: TypeInfo::of::<T>(),
                inner,
                views: Arc::new([]),
            },
        }
    }

    /// Start building a value which may stand in for other types
    #[inline(always)]
    pub fn build<T: Any + Send + Sync>(value: T) -> ValueBuilder<T> {
        ValueBuilder::new(value)
    }

    /// Wrap `value` with the views declared by its [`Provide`] implementation
    #[inline(always)]
    pub fn provide<T: Provide>(value: T) -> Self {
        T::views(ValueBuilder::new(value)).finish()
    }

    /// The type of the wrapped value
    #[inline(always)]
    pub fn type_info(&self) -> TypeInfo {
        self.ty
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.ty.name
    }

    /// Whether the wrapped value is exactly a `T`
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty.id == TypeId::of::<T>()
    }

    /// Whether this value can be used where a `T` is required
    #[inline(always)]
    pub fn is_assignable_to<T: ?Sized + 'static>(&self) -> bool {
        self.is_assignable_to_type(TypeInfo::of::<T>())
    }

    pub fn is_assignable_to_type(&self, ty: TypeInfo) -> bool {
        self.ty == ty || self.views.iter().any(|view| view.target == ty)
    }

    /// Borrow the wrapped value if it is exactly a `T`. Views are not consulted.
    #[inline(always)]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Take the wrapped value out, if it is a `T` and no clones of this value are alive
    pub fn downcast<T: Any + Send + Sync>(self) -> Result<T, Self> {
        let Value { ty, inner, views } = self;
        match inner.downcast::<T>() {
            Ok(inner) => Arc::try_unwrap(inner).map_err(|inner| Value { ty, inner, views }),
            Err(inner) => Err(Value { ty, inner, views }),
        }
    }

    /// Produce a `T` from this value, either by cloning the wrapped value or through a view.
    ///
    /// Returns `None` if the value is not assignable to `T`.
    pub fn extract<T: Clone + 'static>(&self) -> Option<T> {
        if let Some(value) = self.inner.downcast_ref::<T>() {
            return Some(value.clone());
        }

        let target = TypeId::of::<T>();
        self.views
            .iter()
            .filter(|view| view.target.id == target)
            .find_map(|view| (view.cast)(&*self.inner))
            .and_then(|cast| cast.downcast::<T>().ok())
            .map(|cast| *cast)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.ty)
            .field("views", &self.views.iter().map(|v| v.target).collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for a [`Value`] that can stand in for types other than its own
pub struct ValueBuilder<T> {
    value: T,
    views: Vec<View>,
}

impl<T: Any + Send + Sync> ValueBuilder<T> {
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self {
            value,
            views: Vec::new(),
        }
    }

    /// Register a view of the value as a `U`.
    ///
    /// Views are consulted in registration order. A view targeting the value's own type is never
    /// used, since the value itself always matches first.
    pub fn view<U, F>(mut self, cast: F) -> Self
    where
        U: Any,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let cast = move |erased: &Erased| {
            erased
                .downcast_ref::<T>()
                .map(|value| Box::new(cast(value)) as Box<dyn Any>)
        };

        self.views.push(View {
            target: TypeInfo::of::<U>(),
            cast: Arc::new(cast),
        });
        self
    }

    /// Erase the value
    pub fn finish(self) -> Value {
        Value {
            ty: TypeInfo::of::<T>(),
            inner: Arc::new(self.value),
            views: self.views.into(),
        }
    }
}

impl<T: Any + Send + Sync> From<ValueBuilder<T>> for Value {
    #[inline(always)]
    fn from(builder: ValueBuilder<T>) -> Self {
        builder.finish()
    }
}
