extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Entity,
    attributes(
        key,
        table,
        data_source,
        column,
        identity,
        insert_ignore,
        update_ignore,
        dml_ignore,
        select_ignore,
        displayable,
        duplication
    )
)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Enum)]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
