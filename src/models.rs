use serde::{Deserialize, Deserializer, Serialize};

/// A row of `my_table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Item {
    pub pk: i32,
    pub data: String,
}

/// Request body for item creation
///
/// A missing or `null` `data` field decodes to an empty string. Any `pk`
/// sent by the client is ignored; the database assigns it.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct NewItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
