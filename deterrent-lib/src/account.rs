use serde::Deserialize;

/// A Starling current account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The unique ID of the account
    pub account_uid: String,

    /// The account's default spending category
    pub default_category: String,

    /// The ISO-4217 currency code of the account
    pub currency: String,
}
