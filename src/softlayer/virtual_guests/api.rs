//! Virtual server API operations

use log::debug;

use super::models::VirtualGuest;
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get virtual server instances on the account
    pub async fn get_virtual_guests(
        &self,
        mask: &str,
        filter: Option<String>,
    ) -> Result<Vec<VirtualGuest>> {
        debug!("Fetching virtual guests with mask: {}", mask);
        let request = ApiRequest::new(api::ACCOUNT, "getVirtualGuests")
            .mask(mask)
            .filter(filter);
        self.call(&request).await
    }
}
