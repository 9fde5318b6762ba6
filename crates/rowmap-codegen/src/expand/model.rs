use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let table = &self.model.table;
        let descriptors = self.expand_field_descriptors();
        let key_fields = self.model.primary_key.iter().map(|index| util::int(*index));
        let value_arms = self.expand_value_arms();
        let set_value_arms = self.expand_set_value_arms();
        let data_source = self.expand_data_source();
        let field = util::ident("field");
        let value = util::ident("value");

        quote! {
            impl #rowmap::Entity for #model_ident {
                const TABLE: &'static str = #table;

                fn fields() -> &'static [#rowmap::FieldDescriptor] {
                    static FIELDS: &[#rowmap::FieldDescriptor] = &[
                        #( #descriptors ),*
                    ];

                    FIELDS
                }

                fn key_fields() -> &'static [usize] {
                    &[ #( #key_fields ),* ]
                }

                fn value(&self, #field: usize) -> #rowmap::Value {
                    match #field {
                        #( #value_arms )*
                        _ => #rowmap::Value::Null,
                    }
                }

                fn set_value(
                    &mut self,
                    #field: usize,
                    #value: #rowmap::Value,
                ) -> #rowmap::Result<()> {
                    match #field {
                        #( #set_value_arms )*
                        _ => {
                            return ::core::result::Result::Err(#rowmap::Error::from_args(
                                format_args!("`{}` has no field {}", #table, #field),
                            ));
                        }
                    }

                    ::core::result::Result::Ok(())
                }

                #data_source
            }
        }
    }

    fn expand_value_arms(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;

        self.model
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => <#ty as #rowmap::Primitive>::to_value(&self.#ident),
                }
            })
            .collect()
    }

    fn expand_set_value_arms(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;
        let value = util::ident("value");

        self.model
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => self.#ident = <#ty as #rowmap::Primitive>::load(#value)?,
                }
            })
            .collect()
    }

    fn expand_data_source(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        match &self.model.data_source {
            Some(data_source) => quote! {
                fn data_source() -> #rowmap::Option<&'static str> {
                    #rowmap::Option::Some(#data_source)
                }
            },
            None => quote!(),
        }
    }
}
