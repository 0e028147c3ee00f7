use serde::{Deserialize, Serialize};

/// A single named secret in a store.
///
/// The value is the base64 encoding of a binary encrypted message
/// addressed to every recipient the store was sealed for. Field names
/// in the persisted JSON are capitalized for compatibility with
/// existing store documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "EncryptedValue")]
    pub encrypted_value: String,
}

/// The persisted shape of a store file.
///
/// ```json
/// { "Properties": [ { "Name": "...", "EncryptedValue": "..." } ] }
/// ```
///
/// Array order is significant and preserved across load/save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(rename = "Properties")]
    pub properties: Vec<Property>,
}
