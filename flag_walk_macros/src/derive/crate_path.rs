//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[flag_walk(crate = "...")]` attribute value into a
//! `TokenStream` that replaces hardcoded `::flag_walk::` paths in generated
//! code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed container attribute.
///
/// Defaults to `::flag_walk`; an explicit path is used verbatim.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::flag_walk }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: flag_walk")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("my_ns::flag_walk"), "my_ns :: flag_walk")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
