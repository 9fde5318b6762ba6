use super::util;
use crate::schema::EnumModel;

use proc_macro2::TokenStream;
use quote::quote;

/// Implements `Primitive` for a fieldless enum.
///
/// Loading accepts the enum value itself, the variant name (surrounding
/// whitespace ignored) or the discriminant as a number or numeric text.
pub(super) fn expand_primitive_impl(model: &EnumModel, rowmap: &TokenStream) -> TokenStream {
    let ident = &model.ident;
    let ty_name = ident.to_string();
    let value = util::ident("value");
    let discriminant = util::ident("discriminant");
    let name = util::ident("name");

    let names: Vec<String> = model.variants.iter().map(ToString::to_string).collect();
    let variants = &model.variants;

    quote! {
        impl #rowmap::Primitive for #ident {
            const TYPE: #rowmap::Type = #rowmap::Type::Enum;

            fn load(#value: #rowmap::Value) -> #rowmap::Result<Self> {
                let #discriminant: ::core::option::Option<i64> = match &#value {
                    #rowmap::Value::Enum(#value) => ::core::option::Option::Some(#value.discriminant),
                    #rowmap::Value::String(#name) => match #name.trim() {
                        #( #names => return ::core::result::Result::Ok(#ident::#variants), )*
                        #name => #name.parse::<i64>().ok(),
                    },
                    #value => <i64 as #rowmap::Primitive>::load(#value.clone()).ok(),
                };

                if let ::core::option::Option::Some(#discriminant) = #discriminant {
                    #(
                        if #discriminant == #ident::#variants as i64 {
                            return ::core::result::Result::Ok(#ident::#variants);
                        }
                    )*
                }

                ::core::result::Result::Err(#rowmap::Error::type_conversion(#value, #ty_name))
            }

            fn to_value(&self) -> #rowmap::Value {
                let (#discriminant, #name) = match self {
                    #( #ident::#variants => (#ident::#variants as i64, #names), )*
                };

                #rowmap::Value::Enum(#rowmap::ValueEnum {
                    discriminant: #discriminant,
                    name: #name,
                })
            }
        }
    }
}
