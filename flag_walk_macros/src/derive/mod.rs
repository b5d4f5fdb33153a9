//! Expansion of `#[derive(FlagNode)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and emits its `FlagNode` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.container.crate_path.as_ref());
    Ok(generate::flag_node_impl(input, &parsed, &krate))
}
