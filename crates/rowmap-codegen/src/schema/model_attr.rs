use super::{ErrorSet, KeyAttr};

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Primary key definition
    pub(crate) key: Option<KeyAttr>,

    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// Optional connection string the entity lives behind
    pub(crate) data_source: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(
        &mut self,
        attrs: &[syn::Attribute],
        names: &[syn::Ident],
    ) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("key") {
                if self.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    match KeyAttr::from_ast(attr, names) {
                        Ok(key) => self.key = Some(key),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                } else {
                    self.table = Some(name_value(attr, "table")?);
                }
            } else if attr.path().is_ident("data_source") {
                if self.data_source.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate `data_source` attribute",
                    ));
                } else {
                    self.data_source = Some(name_value(attr, "data_source")?);
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Parses `#[<name> = "..."]`.
fn name_value(attr: &syn::Attribute, name: &str) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, format!("expected `{name} = \"...\"`"));

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(expected());
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(expected());
    };

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(lit, format!("`{name}` cannot be empty")));
    }

    Ok(lit.clone())
}
