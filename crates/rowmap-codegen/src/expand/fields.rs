use super::Expand;
use crate::schema::{Access, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One `FieldDescriptor` expression per field, in declaration order.
    pub(super) fn expand_field_descriptors(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .map(|field| self.expand_field_descriptor(field))
            .collect()
    }

    fn expand_field_descriptor(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = field.ident.to_string();
        let ty = &field.ty;

        let mut descriptor = quote! {
            #rowmap::FieldDescriptor::new(#name, <#ty as #rowmap::Primitive>::TYPE)
                .nullable(<#ty as #rowmap::Primitive>::NULLABLE)
        };

        if let Some(column) = field.column_name() {
            descriptor = quote!(#descriptor.column(#column));
        }

        if let Some(access) = field.access() {
            let access = match access {
                Access::ReadOnly => quote!(ReadOnly),
                Access::WriteOnly => quote!(WriteOnly),
            };
            descriptor = quote!(#descriptor.access(#rowmap::Access::#access));
        }

        for tag in &field.attrs.tags {
            let tag = syn::Ident::new(tag.variant_name(), proc_macro2::Span::call_site());
            descriptor = quote!(#descriptor.tag(#rowmap::Tag::#tag));
        }

        if let Some(group) = field.attrs.duplication {
            descriptor = quote!(#descriptor.duplication(#group));
        }

        descriptor
    }
}
