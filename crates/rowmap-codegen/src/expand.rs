mod enum_model;
mod fields;
mod model;
mod util;

use crate::schema::{EnumModel, Model};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();

        wrap_in_const(quote! {
            #entity_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

pub(super) fn enum_model(model: &EnumModel) -> TokenStream {
    let rowmap = quote!(_rowmap::codegen_support);

    wrap_in_const(enum_model::expand_primitive_impl(model, &rowmap))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
