//! Procedural macros for `flag_walk`.
//!
//! `#[derive(FlagNode)]` generates the child accessor the walker uses to
//! reach a struct's fields, in declaration order. Fields marked
//! `#[flag_walk(skip)]` are left out. A struct marked
//! `#[flag_walk(add_flags)]` also reports its own `AddFlags` implementation
//! as the hook to fire at its node.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flag_walk::FlagNode`.
#[proc_macro_derive(FlagNode, attributes(flag_walk))]
pub fn derive_flag_node(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;
