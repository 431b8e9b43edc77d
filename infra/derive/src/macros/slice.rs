use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let handle = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    // Unit structs need a trailing semicolon to stay valid after renaming.
    let body = match &input.fields {
        Fields::Unit => quote! { ; },
        Fields::Unnamed(fields) => quote! { #fields; },
        Fields::Named(fields) => quote! { #fields },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::whub_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl ::std::convert::From<#handle> for ::whub_kernel::domain::registry::InitializedSlice {
            fn from(slice: #handle) -> Self {
                Self::new(slice)
            }
        }
    }
}
