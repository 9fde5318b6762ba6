use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    /// Table the model maps to
    pub(crate) table: syn::LitStr,

    /// Indices of the primary key fields
    pub(crate) primary_key: Vec<usize>,

    /// Connection string override
    pub(crate) data_source: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let names: Vec<syn::Ident> = node
            .named
            .iter()
            .filter_map(|field| field.ident.clone())
            .collect();

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs, &names) {
            errs.push(err);
        }

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => {
                    if model_attr.key.is_some() {
                        if let Some(attr) = &field.attrs.key {
                            errs.push(syn::Error::new_spanned(
                                attr,
                                "field cannot have #[key] attribute when entity has #[key] attribute",
                            ));
                        }
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if fields.iter().filter(|field| field.is_identity()).count() > 1 {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "an entity can have at most one #[identity] field",
            ));
        }

        let primary_key: Vec<usize> = match &model_attr.key {
            Some(key) => key
                .fields
                .iter()
                .filter_map(|ident| names.iter().position(|name| name == ident))
                .collect(),
            None => fields
                .iter()
                .filter(|field| field.attrs.key.is_some())
                .map(|field| field.id)
                .collect(),
        };

        if primary_key.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "missing primary key: annotate a field with #[key] or the struct with #[key(...)]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table = model_attr
            .table
            .unwrap_or_else(|| syn::LitStr::new(&ast.ident.to_string(), ast.ident.span()));

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            table,
            primary_key,
            data_source: model_attr.data_source,
        })
    }
}
