//! Storage API operations

use log::debug;

use super::models::NetworkStorage;
use super::VolumeKind;
use crate::config::api;
use crate::error::Result;
use crate::softlayer::{ApiRequest, SlClient};

impl SlClient {
    /// Get block or file volumes on the account
    pub async fn get_volumes(
        &self,
        kind: VolumeKind,
        mask: &str,
        filter: Option<String>,
    ) -> Result<Vec<NetworkStorage>> {
        debug!("Fetching {} volumes with mask: {}", kind, mask);
        let request = ApiRequest::new(api::ACCOUNT, kind.list_method())
            .mask(mask)
            .filter(filter);
        self.call(&request).await
    }

    /// Get one volume
    pub async fn get_volume(&self, id: u64, mask: &str) -> Result<NetworkStorage> {
        debug!("Fetching volume {}", id);
        let request = ApiRequest::new(api::NETWORK_STORAGE, "getObject")
            .id(id)
            .mask(mask);
        self.call(&request).await
    }

    /// Get snapshots of a volume
    pub async fn get_snapshots(&self, id: u64, mask: &str) -> Result<Vec<NetworkStorage>> {
        debug!("Fetching snapshots of volume {}", id);
        let request = ApiRequest::new(api::NETWORK_STORAGE, "getSnapshots")
            .id(id)
            .mask(mask);
        self.call(&request).await
    }
}
