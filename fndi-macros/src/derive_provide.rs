use proc_macro2::{Span, TokenStream};
use proc_macro_crate::FoundCrate;
use quote::{quote, ToTokens};
use syn::{
    parse::ParseStream, punctuated::Punctuated, spanned::Spanned, DeriveInput, Ident, Path,
    Result, Token,
};

/// The traits listed in `#[provide(...)]` attributes
#[derive(Default)]
struct ProvideArgs {
    traits: Vec<Path>,
}

impl ProvideArgs {
    /// Parse a comma separated list of trait paths
    fn parse_list(input: ParseStream) -> Result<impl Iterator<Item = Path>> {
        Ok(Punctuated::<Path, Token![,]>::parse_terminated(input)?.into_iter())
    }

    fn add_trait(&mut self, path: Path) -> Result<()> {
        let key = path.to_token_stream().to_string();
        if self
            .traits
            .iter()
            .any(|known| known.to_token_stream().to_string() == key)
        {
            return Err(syn::Error::new(
                path.span(),
                format!("Duplicate definition of `{key}`"),
            ));
        }

        self.traits.push(path);
        Ok(())
    }
}

pub fn derive_provide(input: DeriveInput) -> Result<TokenStream> {
    let mut args = ProvideArgs::default();
    for attr in input
        .attrs
        .iter()
        .filter(|attr| attr.path.is_ident("provide"))
    {
        for path in attr.parse_args_with(ProvideArgs::parse_list)? {
            args.add_trait(path)?;
        }
    }

    let krate = match proc_macro_crate::crate_name("fndi")
        .or_else(|_| proc_macro_crate::crate_name("fndi-core"))
        .map_err(|_| {
            syn::Error::new(
                Span::call_site(),
                "Crate `fndi` or `fndi-core` must be present in Cargo.toml",
            )
        })? {
        FoundCrate::Itself => quote!(fndi),
        FoundCrate::Name(name) => {
            let name = Ident::new(&name, Span::call_site());
            quote!(#name)
        }
    };

    let ty = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let views = args.traits.iter().map(|path| {
        quote! {
            .view(|this: &Self| -> ::std::sync::Arc<dyn #path> {
                ::std::sync::Arc::new(::core::clone::Clone::clone(this))
            })
        }
    });

    let expanded = quote! {
        impl #impl_generics #krate::Provide for #ty #ty_generics #where_clause {
            fn views(builder: #krate::ValueBuilder<Self>) -> #krate::ValueBuilder<Self> {
                builder #(#views)*
            }
        }
    };

    Ok(expanded)
}
