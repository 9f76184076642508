//! Implementation of the `#[derive(Destination)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Generics, Ident, parse_macro_input, parse_quote};

use crate::attributes::{FieldSpec, named_fields};

/// Main implementation of the Destination derive macro.
pub fn derive_destination_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => named_fields(&input.ident, &data_struct.fields, "Destination")
            .map_or_else(
                |error| error.to_compile_error(),
                |fields| generate_destination(&input.ident, &input.generics, &fields),
            ),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Destination can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Destination cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates the field table and the `Destination` impl.
///
/// Skipped fields stay in the table, marked unsettable, so indices follow
/// declaration order.
fn generate_destination(name: &Ident, generics: &Generics, fields: &[FieldSpec<'_>]) -> TokenStream2 {
    let descriptors = fields.iter().map(|field| {
        let field_name = field.name();
        let tags = field.tag_tokens();
        let settable = if field.skip {
            quote!(.unsettable())
        } else {
            TokenStream2::new()
        };
        quote! {
            ::assign::Field::new(#field_name).with_tags(#tags)#settable
        }
    });

    let settable: Vec<(usize, &FieldSpec<'_>)> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.skip)
        .collect();
    let indices = settable.iter().map(|(index, _)| index);
    let idents = settable.iter().map(|(_, field)| field.ident);

    let mut generics = generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for (_, field) in &settable {
            let ty = field.ty;
            where_clause.predicates.push(parse_quote!(#ty: ::assign::Destination));
        }
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::assign::Destination for #name #type_generics #where_clause {
            fn kind(&self) -> ::assign::Kind {
                ::assign::Kind::Struct
            }

            fn fields(&self) -> &'static [::assign::Field] {
                const FIELDS: &[::assign::Field] = &[#(#descriptors),*];
                FIELDS
            }

            fn field_mut(&mut self, index: usize) -> ::std::option::Option<&mut dyn ::assign::Destination> {
                match index {
                    #(#indices => ::std::option::Option::Some(&mut self.#idents as &mut dyn ::assign::Destination),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}
