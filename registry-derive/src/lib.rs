//! `#[derive(Model)]` for registry models.
//!
//! ```ignore
//! #[derive(Model, FromRow, Clone, Debug)]
//! #[model(table = "users")]
//! struct User {
//!     #[field(primary_key = true, auto = true)]
//!     id: Integer,
//!     #[field(size = 255)]
//!     name: String,
//! }
//! ```
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;

#[proc_macro_derive(Model, attributes(model, field))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    codegen::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
