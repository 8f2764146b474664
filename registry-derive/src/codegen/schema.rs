use deluxe::ExtractAttributes;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, Field, GenericArgument, Ident, PathArguments, Type};

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(field))]
struct FieldAttributes {
    primary_key: Option<bool>,
    auto: Option<bool>,
    unique: Option<bool>,
    size: Option<u32>,
}

pub struct FieldModel {
    pub ident: Ident,
    pub column_name: String,
    /// `::registry::db::schema::Column` literal describing the field.
    pub column: TokenStream,
    pub primary_key: bool,
    pub insertable: bool,
}

pub fn field_model(field: &mut Field) -> syn::Result<FieldModel> {
    let attributes = FieldAttributes::extract_attributes(field)?;
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(&*field, "Model fields must be named"))?;
    let column_name = ident.unraw().to_string();

    let primary_key = attributes.primary_key.unwrap_or(false);
    let auto = attributes.auto.unwrap_or(false);
    let unique = attributes.unique.unwrap_or(false);
    if auto && !primary_key {
        return Err(syn::Error::new_spanned(
            &ident,
            "'auto' only applies to the primary key",
        ));
    }

    let (inner_type, nullable) = unwrap_option(&field.ty);
    let kind = column_kind(inner_type, attributes.size)?;
    if auto && !matches!(type_name(inner_type).as_deref(), Some("Integer" | "i64" | "i32")) {
        return Err(syn::Error::new_spanned(
            inner_type,
            "auto-incremented keys must be integers",
        ));
    }

    let column = quote! {
        ::registry::db::schema::Column {
            name: #column_name,
            kind: ::registry::db::schema::ColumnKind::#kind,
            primary_key: #primary_key,
            auto: #auto,
            unique: #unique,
            nullable: #nullable,
        }
    };

    Ok(FieldModel {
        ident,
        column_name,
        column,
        primary_key,
        insertable: !(primary_key && auto),
    })
}

fn column_kind(ty: &Type, size: Option<u32>) -> syn::Result<TokenStream> {
    let name = type_name(ty);
    if size.is_some() && name.as_deref() != Some("String") {
        return Err(syn::Error::new_spanned(
            ty,
            "'size' only applies to String fields",
        ));
    }

    match name.as_deref() {
        Some("Integer" | "i64" | "i32") => Ok(quote! { Integer }),
        Some("Text") => Ok(quote! { Text }),
        Some("String") => {
            let size = size.unwrap_or(255);
            Ok(quote! { Varchar(#size) })
        }
        _ => Err(syn::Error::new_spanned(
            ty,
            "unsupported field type, expected one of: Integer, i64, i32, String, Text",
        )),
    }
}

/// Strips one level of `Option`, reporting whether it was present.
fn unwrap_option(ty: &Type) -> (&Type, bool) {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Option" {
                if let PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(GenericArgument::Type(inner)) = args.args.first() {
                        return (inner, true);
                    }
                }
            }
        }
    }
    (ty, false)
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}
