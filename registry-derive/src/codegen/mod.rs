mod schema;

use deluxe::ExtractAttributes;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::codegen::schema::FieldModel;

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(model))]
struct ModelAttributes {
    table: Option<String>,
}

pub fn expand(mut input: DeriveInput) -> syn::Result<TokenStream> {
    let attributes = ModelAttributes::extract_attributes(&mut input)?;
    let name = &input.ident;

    let mut fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.clone(),
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Model derive macro only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Model derive macro only supports structs",
            ))
        }
    };

    let models = fields
        .iter_mut()
        .map(schema::field_model)
        .collect::<syn::Result<Vec<FieldModel>>>()?;

    let mut primary_keys = models.iter().filter(|model| model.primary_key);
    let primary_key = match (primary_keys.next(), primary_keys.next()) {
        (Some(model), None) => model.column_name.clone(),
        (None, _) => {
            return Err(syn::Error::new_spanned(
                name,
                "Model requires one field marked #[field(primary_key = true)]",
            ))
        }
        (Some(_), Some(second)) => {
            return Err(syn::Error::new_spanned(
                &second.ident,
                "Model supports a single primary key field",
            ))
        }
    };

    let table = attributes.table.unwrap_or_else(|| name.to_string());
    let columns = models.iter().map(|model| &model.column);
    let insert_fields = models
        .iter()
        .filter(|model| model.insertable)
        .map(|model| &model.ident)
        .collect::<Vec<_>>();

    Ok(quote! {
        #[::registry::async_trait::async_trait]
        impl ::registry::db::model::Model for #name {
            const TABLE: &'static str = #table;
            const PK: &'static str = #primary_key;
            const COLUMNS: &'static [::registry::db::schema::Column] = &[#(#columns),*];

            async fn save(
                &self,
                db: &::registry::db::Database,
            ) -> ::std::result::Result<::std::option::Option<i64>, ::registry::db::Error> {
                <Self as ::registry::db::model::Model>::create(
                    ::registry::kwargs!(#(#insert_fields = self.#insert_fields.clone()),*),
                    db,
                )
                .await
            }
        }

        ::registry::inventory::submit! {
            ::registry::db::MigrationRegistrar {
                migrate_fn: <#name as ::registry::db::model::Model>::migrate
            }
        }
    })
}
