//! Security group API operations

use log::debug;

use super::models::{NetworkComponentBinding, SecurityGroup, SecurityGroupRule};
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get all security groups visible to the account
    pub async fn get_security_groups(&self, mask: &str) -> Result<Vec<SecurityGroup>> {
        debug!("Fetching security groups with mask: {}", mask);
        let request = ApiRequest::new(api::SECURITY_GROUP, "getAllObjects").mask(mask);
        self.call(&request).await
    }

    /// Get one security group
    pub async fn get_security_group(&self, id: u64, mask: &str) -> Result<SecurityGroup> {
        debug!("Fetching security group {}", id);
        let request = ApiRequest::new(api::SECURITY_GROUP, "getObject")
            .id(id)
            .mask(mask);
        self.call(&request).await
    }

    /// Get the rules of a security group
    pub async fn get_security_group_rules(
        &self,
        id: u64,
        mask: &str,
    ) -> Result<Vec<SecurityGroupRule>> {
        debug!("Fetching rules of security group {}", id);
        let request = ApiRequest::new(api::SECURITY_GROUP, "getRules")
            .id(id)
            .mask(mask);
        self.call(&request).await
    }

    /// Get the network component bindings of a security group
    pub async fn get_security_group_bindings(
        &self,
        id: u64,
        mask: &str,
    ) -> Result<Vec<NetworkComponentBinding>> {
        debug!("Fetching interfaces of security group {}", id);
        let request = ApiRequest::new(api::SECURITY_GROUP, "getNetworkComponentBindings")
            .id(id)
            .mask(mask);
        self.call(&request).await
    }
}
