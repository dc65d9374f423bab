#![forbid(unsafe_code)]

mod derive_provide;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Error};

/// Implement [`Provide`] for a type, registering a view for every trait listed in the
/// `#[provide(...)]` attribute.
///
/// Every listed trait gets a view to `Arc<dyn Trait>`, built by cloning the value, so the type
/// must implement [`Clone`] and each of the listed traits. Without the attribute, no views are
/// registered.
///
/// ```
/// # use fndi::{Provide, Value};
/// # use std::sync::Arc;
/// trait Store: Send + Sync {}
///
/// #[derive(Clone, Provide)]
/// #[provide(Store)]
/// struct Memory;
///
/// impl Store for Memory {}
///
/// // The above generates:
/// // impl Provide for Memory {
/// //     fn views(builder: ValueBuilder<Self>) -> ValueBuilder<Self> {
/// //         builder.view(|this: &Self| -> Arc<dyn Store> { Arc::new(this.clone()) })
/// //     }
/// // }
///
/// assert!(Value::provide(Memory).is_assignable_to::<Arc<dyn Store>>());
/// ```
#[proc_macro_derive(Provide, attributes(provide))]
pub fn derive_provide(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_provide::derive_provide(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
