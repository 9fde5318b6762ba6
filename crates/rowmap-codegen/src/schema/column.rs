#[derive(Debug, Default)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) access: Option<Access>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    ReadOnly,
    WriteOnly,
}

mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(read_only);
    syn::custom_keyword!(write_only);
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(name = "name")]
        // #[column(read_only)]
        // #[column("name", write_only)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) || lookahead.peek(kw::name) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }

                if input.peek(kw::name) {
                    let _kw: kw::name = input.parse()?;
                    let _eq_token: syn::Token![=] = input.parse()?;
                }

                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::read_only) || lookahead.peek(kw::write_only) {
                if result.access.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column access"));
                }

                result.access = Some(if input.peek(kw::read_only) {
                    let _kw: kw::read_only = input.parse()?;
                    Access::ReadOnly
                } else {
                    let _kw: kw::write_only = input.parse()?;
                    Access::WriteOnly
                });
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
