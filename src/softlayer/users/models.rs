use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct UserStatus {
    pub name: Option<String>,
}

/// Portal user of the account
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub user_status: Option<UserStatus>,
    pub hardware_count: Option<i64>,
    pub virtual_guest_count: Option<i64>,
    pub external_binding_count: Option<i64>,
    pub api_authentication_key_count: Option<i64>,
}

impl User {
    pub fn status(&self) -> Option<&str> {
        self.user_status.as_ref()?.name.as_deref()
    }
}
