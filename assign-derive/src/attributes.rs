//! Parsing of `#[assign(...)]` field attributes.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Fields, Ident, LitStr, Type};

/// A named field together with its parsed `#[assign(...)]` options.
pub struct FieldSpec<'a> {
    /// The field identifier as written, possibly a raw identifier.
    pub ident: &'a Ident,
    /// The field type.
    pub ty: &'a Type,
    /// `(key, value)` tags; `key` is `None` for the default `assign` key.
    pub tags: Vec<(Option<String>, LitStr)>,
    /// Whether the field takes no part in assignment.
    pub skip: bool,
}

impl FieldSpec<'_> {
    /// The declared name without the `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Builds the `(key, value)` tag list as a const slice expression.
    pub fn tag_tokens(&self) -> TokenStream2 {
        let pairs = self.tags.iter().map(|(key, value)| match key {
            Some(key) => quote! { (#key, #value) },
            None => quote! { (::assign::DEFAULT_TAG, #value) },
        });
        quote! { &[#(#pairs),*] }
    }
}

/// Collects the named fields of a struct, or none for a unit struct.
pub fn named_fields<'a>(name: &Ident, fields: &'a Fields, derive: &str) -> syn::Result<Vec<FieldSpec<'a>>> {
    match fields {
        Fields::Named(named) => named.named.iter().map(parse_field).collect(),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            name,
            format!("{derive} can only be derived for structs with named fields, not tuple structs."),
        )),
    }
}

fn parse_field(field: &Field) -> syn::Result<FieldSpec<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let mut tags: Vec<(Option<String>, LitStr)> = Vec::new();
    let mut skip = false;

    for attribute in &field.attrs {
        if !attribute.path().is_ident("assign") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                push_tag(&mut tags, None, value, &meta)
            } else if meta.path.is_ident("tag") {
                meta.parse_nested_meta(|tag| {
                    let Some(key) = tag.path.get_ident() else {
                        return Err(tag.error("expected a tag key such as `json`"));
                    };
                    let key = key.unraw().to_string();
                    let value: LitStr = tag.value()?.parse()?;
                    let key = (key != "assign").then_some(key);
                    push_tag(&mut tags, key, value, &tag)
                })
            } else {
                Err(meta.error("unsupported assign attribute, expected `rename`, `tag` or `skip`"))
            }
        })?;
    }

    Ok(FieldSpec {
        ident,
        ty: &field.ty,
        tags,
        skip,
    })
}

fn push_tag(
    tags: &mut Vec<(Option<String>, LitStr)>,
    key: Option<String>,
    value: LitStr,
    meta: &syn::meta::ParseNestedMeta<'_>,
) -> syn::Result<()> {
    if tags.iter().any(|(existing, _)| *existing == key) {
        let key = key.as_deref().unwrap_or("assign");
        return Err(meta.error(format!("duplicate `{key}` tag")));
    }
    tags.push((key, value));
    Ok(())
}
