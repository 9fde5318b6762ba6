use super::ErrorSet;

/// A fieldless enum stored as its discriminant.
#[derive(Debug)]
pub(crate) struct EnumModel {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Unit variants, in declaration order
    pub(crate) variants: Vec<syn::Ident>,
}

impl EnumModel {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut variants = vec![];

        for variant in &ast.variants {
            if matches!(variant.fields, syn::Fields::Unit) {
                variants.push(variant.ident.clone());
            } else {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "only unit variants can be mapped",
                ));
            }
        }

        if variants.is_empty() && ast.variants.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "an enum without variants cannot be mapped",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(EnumModel {
            ident: ast.ident.clone(),
            variants,
        })
    }
}
