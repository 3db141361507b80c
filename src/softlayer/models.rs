//! Data models shared by several SoftLayer resource types
//!
//! Every field is optional: the API only returns what the object mask asked
//! for, and may omit even those.

use serde::{Deserialize, Deserializer, Serialize};

/// Datacenter location
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub long_name: Option<String>,
}

/// Customer user record attached to an order
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Option<i64>,
    pub username: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub user_record: Option<UserRecord>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub order: Option<Order>,
}

/// Billing item; only the ordering user is of interest here
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    pub id: Option<i64>,
    pub order_item: Option<OrderItem>,
}

impl BillingItem {
    /// Username of whoever placed the order
    pub fn created_by(&self) -> Option<&str> {
        self.order_item
            .as_ref()?
            .order
            .as_ref()?
            .user_record
            .as_ref()?
            .username
            .as_deref()
    }
}

/// Follow an optional billing item to its ordering user
pub fn created_by(billing_item: &Option<BillingItem>) -> Option<&str> {
    billing_item.as_ref()?.created_by()
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagReference {
    pub id: Option<i64>,
    pub tag_id: Option<i64>,
    pub tag: Option<Tag>,
}

/// Names of all referenced tags, in reference order
pub fn tag_names(references: &Option<Vec<TagReference>>) -> Vec<&str> {
    references
        .iter()
        .flatten()
        .filter_map(|r| r.tag.as_ref()?.name.as_deref())
        .collect()
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatus {
    pub name: Option<String>,
    pub friendly_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Option<i64>,
    pub transaction_status: Option<TransactionStatus>,
}

/// Numbers the API sometimes encodes as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Float(f64),
    Text(String),
}

/// Deserialize an optional float given either as a JSON number or a string
pub fn opt_flexible_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Number>::deserialize(deserializer)? {
        Some(Number::Float(v)) => Some(v),
        Some(Number::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
