//! Token generation for the `FlagNode` implementation.

use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{DeriveInput, Ident, parse_quote};

use super::parse::ParsedInput;

/// Returns `true` when `tokens` mention any of `params`.
fn mentions_any(tokens: TokenStream, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
        TokenTree::Group(group) => mentions_any(group.stream(), params),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

/// Builds the generics for the impl.
///
/// Visited fields whose type depends on a type parameter must themselves be
/// nodes; types that declare a hook must implement `AddFlags`.
fn impl_generics(input: &DeriveInput, parsed: &ParsedInput, krate: &TokenStream) -> syn::Generics {
    let mut generics = input.generics.clone();
    let params: Vec<&Ident> = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();
    let where_clause = generics.make_where_clause();
    for field in &parsed.fields {
        if mentions_any(field.ty.to_token_stream(), &params) {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #krate::FlagNode));
        }
    }
    if parsed.container.add_flags {
        where_clause
            .predicates
            .push(parse_quote!(Self: #krate::AddFlags));
    }
    generics
}

/// Emits `impl FlagNode for ...`.
pub(crate) fn flag_node_impl(
    input: &DeriveInput,
    parsed: &ParsedInput,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let generics = impl_generics(input, parsed, krate);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let own_flags = parsed.container.add_flags.then(|| {
        quote! {
            fn own_flags(
                &mut self,
            ) -> ::core::option::Option<&mut dyn #krate::AddFlags> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let visit_children = (!parsed.fields.is_empty()).then(|| {
        let members = parsed.fields.iter().map(|field| &field.member);
        quote! {
            fn visit_children(
                &mut self,
                visit: &mut dyn ::core::ops::FnMut(#krate::Target<'_>),
            ) {
                #( visit(#krate::Target::node(&mut self.#members)); )*
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::FlagNode for #ident #ty_generics #where_clause {
            #own_flags
            #visit_children
        }
    }
}
