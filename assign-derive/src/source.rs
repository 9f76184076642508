//! Implementation of the `#[derive(Source)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Generics, Ident, parse_macro_input, parse_quote};

use crate::attributes::{FieldSpec, named_fields};

/// Main implementation of the Source derive macro.
pub fn derive_source_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => named_fields(&input.ident, &data_struct.fields, "Source")
            .map_or_else(
                |error| error.to_compile_error(),
                |fields| generate_source(&input.ident, &input.generics, &fields),
            ),
        Data::Enum(_) => {
            syn::Error::new_spanned(&input.ident, "Source can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Source cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the `Source` impl over the fields that are not skipped.
fn generate_source(name: &Ident, generics: &Generics, fields: &[FieldSpec<'_>]) -> TokenStream2 {
    let readable: Vec<&FieldSpec<'_>> = fields.iter().filter(|field| !field.skip).collect();
    let idents: Vec<&Ident> = readable.iter().map(|field| field.ident).collect();
    let names: Vec<String> = readable.iter().map(|field| field.name()).collect();

    let mut generics = generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for field in &readable {
            let ty = field.ty;
            where_clause.predicates.push(parse_quote!(#ty: ::assign::Source));
        }
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let skip = if idents.is_empty() {
        quote!(true)
    } else {
        quote!(#(::assign::Source::skip(&self.#idents))&&*)
    };

    quote! {
        impl #impl_generics ::assign::Source for #name #type_generics #where_clause {
            fn kind(&self) -> ::assign::Kind {
                ::assign::Kind::Struct
            }

            fn skip(&self) -> bool {
                #skip
            }

            fn field_by_name(&self, name: &str) -> ::assign::DynSource<'_> {
                match name {
                    #(#names => ::std::boxed::Box::new(&self.#idents) as ::assign::DynSource<'_>,)*
                    _ => ::std::boxed::Box::new(::assign::Nil),
                }
            }
        }
    }
}
