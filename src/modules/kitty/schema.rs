use serde::{Deserialize, Deserializer, Serialize};

// Lyf's /public/api/kitties/{id} response format (what we GET from them).
// Unknown fields are ignored, missing or null ones fall back to zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KittyResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub kitty: Kitty,
    #[serde(deserialize_with = "null_as_default")]
    pub available: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kitty {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contributions_counter: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_collected_amount: u64, // cents
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Kitty {
    /// Label values in gauge label order: OwnerFirstName, OwnerLastName, OwnerID, ID
    pub fn label_values(&self) -> [&str; 4] {
        [
            self.owner_first_name.as_str(),
            self.owner_last_name.as_str(),
            self.owner_id.as_str(),
            self.id.as_str(),
        ]
    }
}
