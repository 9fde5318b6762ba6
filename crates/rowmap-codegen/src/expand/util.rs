use proc_macro2::TokenStream;

/// Renders `v` as an unsuffixed integer literal.
pub(crate) fn int(v: usize) -> TokenStream {
    let lit = proc_macro2::Literal::usize_unsuffixed(v);
    quote::quote!(#lit)
}

/// Creates a new identifier prefixed with `__rowmap_` to avoid name
/// collisions with user fields in generated code.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__rowmap_{name}")
}
