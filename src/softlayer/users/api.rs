//! User API operations

use log::debug;

use super::models::User;
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get portal users on the account
    pub async fn get_users(&self, mask: &str) -> Result<Vec<User>> {
        debug!("Fetching users with mask: {}", mask);
        let request = ApiRequest::new(api::ACCOUNT, "getUsers").mask(mask);
        self.call(&request).await
    }
}
