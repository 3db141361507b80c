//! Hardware API operations

use log::debug;

use super::models::Hardware;
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get bare-metal servers on the account
    pub async fn get_hardware(&self, mask: &str, filter: Option<String>) -> Result<Vec<Hardware>> {
        debug!("Fetching hardware with mask: {}", mask);
        let request = ApiRequest::new(api::ACCOUNT, "getHardware")
            .mask(mask)
            .filter(filter);
        self.call(&request).await
    }
}
