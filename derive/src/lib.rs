//! duckmap derive macro.
//!
//! `#[derive(Describe)]` builds a type's field schema once and caches it:
//!   - One field entry per named field, in declaration order
//!   - `#[mapping(name = "...")]` maps the field under an alias
//!   - `#[mapping(ignore)]` excludes the field from mapping
//!   - `#[mapping(no_default)]` on the struct skips the `Default` constructor

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod describe;

/// Derive `duckmap::Describe` for a struct with named fields.
///
/// ```ignore
/// #[derive(Debug, Default, Describe)]
/// pub struct Person {
///     pub id: i32,
///     #[mapping(name = "Name")]
///     pub first_name: String,
///     #[mapping(ignore)]
///     pub birthday: Date,
/// }
/// ```
///
/// Every field type must be `Clone + Debug + 'static`. The struct must be
/// `Default` unless it carries `#[mapping(no_default)]`, in which case
/// `map_new` reports it as unsupported.
#[proc_macro_derive(Describe, attributes(mapping))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    describe::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
