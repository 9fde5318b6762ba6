use super::{Access, Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Optional database column name and / or access
    pub(crate) column: Option<Column>,

    /// Policy tags, in declaration order
    pub(crate) tags: Vec<Tag>,

    /// `#[duplication(N)]` group index
    pub(crate) duplication: Option<u32>,
}

/// Field-level policy attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Identity,
    InsertIgnore,
    UpdateIgnore,
    DmlIgnore,
    SelectIgnore,
    Displayable,
}

impl Tag {
    const ALL: [(&'static str, Tag); 6] = [
        ("identity", Tag::Identity),
        ("insert_ignore", Tag::InsertIgnore),
        ("update_ignore", Tag::UpdateIgnore),
        ("dml_ignore", Tag::DmlIgnore),
        ("select_ignore", Tag::SelectIgnore),
        ("displayable", Tag::Displayable),
    ];

    fn from_attr(attr: &syn::Attribute) -> Option<Tag> {
        Tag::ALL
            .iter()
            .find(|(name, _)| attr.path().is_ident(name))
            .map(|(_, tag)| *tag)
    }

    pub(crate) fn variant_name(self) -> &'static str {
        match self {
            Tag::Identity => "Identity",
            Tag::InsertIgnore => "InsertIgnore",
            Tag::UpdateIgnore => "UpdateIgnore",
            Tag::DmlIgnore => "DmlIgnore",
            Tag::SelectIgnore => "SelectIgnore",
            Tag::Displayable => "Displayable",
        }
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field-level #[key] takes no arguments",
                    ));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("duplication") {
                if attrs.duplication.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[duplication] attribute",
                    ));
                } else {
                    match duplication_group(attr) {
                        Ok(group) => attrs.duplication = Some(group),
                        Err(err) => errs.push(err),
                    }
                }
            } else if let Some(tag) = Tag::from_attr(attr) {
                if attrs.tags.contains(&tag) {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        format!("duplicate #[{}] attribute", tag.variant_name()),
                    ));
                } else {
                    attrs.tags.push(tag);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            id,
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// Column override, if any.
    pub(crate) fn column_name(&self) -> Option<&syn::LitStr> {
        self.attrs.column.as_ref()?.name.as_ref()
    }

    pub(crate) fn access(&self) -> Option<Access> {
        self.attrs.column.as_ref()?.access
    }

    pub(crate) fn is_identity(&self) -> bool {
        self.attrs.tags.contains(&Tag::Identity)
    }
}

/// `#[duplication]` is group 0; `#[duplication(N)]` names the group.
fn duplication_group(attr: &syn::Attribute) -> syn::Result<u32> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(0),
        syn::Meta::List(_) => {
            let lit: syn::LitInt = attr.parse_args()?;
            lit.base10_parse()
        }
        syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[duplication]` or `#[duplication(group)]`",
        )),
    }
}
