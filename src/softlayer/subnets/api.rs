//! Subnet API operations

use log::debug;

use super::models::Subnet;
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get subnets on the account
    pub async fn get_subnets(&self, mask: &str, filter: Option<String>) -> Result<Vec<Subnet>> {
        debug!("Fetching subnets with mask: {}", mask);
        let request = ApiRequest::new(api::ACCOUNT, "getSubnets")
            .mask(mask)
            .filter(filter);
        self.call(&request).await
    }

    /// Get one subnet
    pub async fn get_subnet(&self, id: u64, mask: &str) -> Result<Subnet> {
        debug!("Fetching subnet {} with mask: {}", id, mask);
        let request = ApiRequest::new(api::SUBNET, "getObject").id(id).mask(mask);
        self.call(&request).await
    }
}
