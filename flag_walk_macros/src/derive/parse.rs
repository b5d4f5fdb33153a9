//! Attribute and input parsing for the `FlagNode` derive.
//!
//! Unlike the lenient attribute handling common in derive crates, unknown
//! keys are rejected: a misspelt `skip` would otherwise silently put a field
//! back into the walk.

use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Member};

/// Container-level `#[flag_walk(...)]` settings.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    /// The type implements `AddFlags` itself.
    pub add_flags: bool,
    /// Path to the runtime crate when it is renamed.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[flag_walk(...)]` settings.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
}

/// A field the generated code visits.
pub(crate) struct VisitedField {
    pub member: Member,
    pub ty: syn::Type,
}

/// Everything code generation needs from the input.
pub(crate) struct ParsedInput {
    pub container: ContainerAttrs,
    pub fields: Vec<VisitedField>,
}

/// Iterate all `#[flag_walk(...)]` attributes once and apply a callback.
fn parse_flag_walk<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag_walk")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &syn::meta::ParseNestedMeta, allowed: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "attribute".to_owned(), ToString::to_string);
    meta.error(format!("unknown flag_walk key `{key}`; expected {allowed}"))
}

/// Parses `#[flag_walk(...)]` on the struct itself.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_flag_walk(attrs, |meta| {
        if meta.path.is_ident("add_flags") {
            out.add_flags = true;
            Ok(())
        } else if meta.path.is_ident("crate") {
            let lit = meta.value()?.parse::<LitStr>()?;
            out.crate_path = Some(lit.parse::<syn::Path>()?);
            Ok(())
        } else {
            Err(unknown_key(meta, "`add_flags` or `crate`"))
        }
    })?;
    Ok(out)
}

/// Parses `#[flag_walk(...)]` on a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_flag_walk(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(unknown_key(meta, "`skip`"))
        }
    })?;
    Ok(out)
}

/// Gathers container settings and the visited fields in declaration order.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let container = parse_container_attrs(&input.attrs)?;
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "FlagNode can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "FlagNode can only be derived for structs",
            ));
        }
    };

    let mut visited = Vec::new();
    let members: Vec<(Member, &syn::Field)> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| {
                field
                    .ident
                    .clone()
                    .map(|ident| (Member::Named(ident), field))
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| (Member::Unnamed(index.into()), field))
            .collect(),
        Fields::Unit => Vec::new(),
    };
    for (member, field) in members {
        if parse_field_attrs(&field.attrs)?.skip {
            continue;
        }
        visited.push(VisitedField {
            member,
            ty: field.ty.clone(),
        });
    }

    Ok(ParsedInput {
        container,
        fields: visited,
    })
}
