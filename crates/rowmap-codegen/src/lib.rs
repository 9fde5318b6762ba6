mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Entity)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

/// Expands `#[derive(Enum)]`.
pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let model = schema::EnumModel::from_ast(&item)?;

    Ok(expand::enum_model(&model))
}
