//! Unit tests for the `FlagNode` expansion.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use crate::derive::expand;

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    expand(input)
        .map(|tokens| tokens.to_string())
        .map_err(|err| anyhow!("expansion failed: {err}"))
}

#[rstest]
fn visits_fields_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Config {
            server: Server,
            #[flag_walk(skip)]
            cache: Cache,
            logging: Logging,
        }
    };
    let out = expand_to_string(&input)?;
    let server = out.find("self . server").ok_or_else(|| anyhow!("server missing: {out}"))?;
    let logging = out.find("self . logging").ok_or_else(|| anyhow!("logging missing: {out}"))?;
    ensure!(server < logging, "fields out of order: {out}");
    ensure!(!out.contains("self . cache"), "skipped field visited: {out}");
    ensure!(!out.contains("own_flags"), "hook emitted without add_flags: {out}");
    Ok(())
}

#[rstest]
fn add_flags_reports_own_hook() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flag_walk(add_flags)]
        struct Logging {
            level: String,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(out.contains("fn own_flags"), "own_flags missing: {out}");
    ensure!(out.contains("Self : :: flag_walk :: AddFlags"), "hook bound missing: {out}");
    Ok(())
}

#[rstest]
fn tuple_fields_use_indices() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Pair(First, #[flag_walk(skip)] Skipped, Second);
    };
    let out = expand_to_string(&input)?;
    ensure!(out.contains("self . 0"), "first index missing: {out}");
    ensure!(!out.contains("self . 1"), "skipped index visited: {out}");
    ensure!(out.contains("self . 2"), "third index missing: {out}");
    Ok(())
}

#[rstest]
fn unit_structs_have_no_children() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Marker;
    };
    let out = expand_to_string(&input)?;
    ensure!(!out.contains("visit_children"), "unexpected children: {out}");
    Ok(())
}

#[rstest]
fn generic_fields_are_bounded() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> {
            inner: T,
            count: u8,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(out.contains("T : :: flag_walk :: FlagNode"), "bound missing: {out}");
    ensure!(!out.contains("u8 : :: flag_walk :: FlagNode"), "concrete field bounded: {out}");
    Ok(())
}

#[rstest]
fn crate_path_is_honoured() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flag_walk(crate = "renamed::walk")]
        struct Config {
            port: u16,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(out.contains("renamed :: walk :: FlagNode"), "crate path ignored: {out}");
    ensure!(!out.contains(":: flag_walk ::"), "default path leaked: {out}");
    Ok(())
}

#[rstest]
#[case::enumeration(parse_quote! { enum Mode { Fast, Slow } }, "can only be derived for structs")]
#[case::unknown_container(
    parse_quote! { #[flag_walk(flatten)] struct Config { port: u16 } },
    "unknown flag_walk key `flatten`"
)]
#[case::unknown_field(
    parse_quote! { struct Config { #[flag_walk(hidden)] port: u16 } },
    "unknown flag_walk key `hidden`"
)]
fn rejects_unsupported_input(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
    let Err(err) = expand(&input) else {
        return Err(anyhow!("expansion unexpectedly succeeded"));
    };
    ensure!(err.to_string().contains(message), "unexpected error: {err}");
    Ok(())
}
