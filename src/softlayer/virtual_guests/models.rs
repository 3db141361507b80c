//! Virtual server models

use serde::{Deserialize, Serialize};

use crate::softlayer::models::{BillingItem, Datacenter, TagReference, Transaction};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PowerState {
    pub key_name: Option<String>,
    pub name: Option<String>,
}

/// Virtual server as returned by `SoftLayer_Account::getVirtualGuests`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
    pub id: Option<i64>,
    pub global_identifier: Option<String>,
    pub hostname: Option<String>,
    pub domain: Option<String>,
    pub max_cpu: Option<i64>,
    pub max_memory: Option<i64>,
    pub primary_ip_address: Option<String>,
    pub primary_backend_ip_address: Option<String>,
    pub datacenter: Option<Datacenter>,
    pub active_transaction: Option<Transaction>,
    pub power_state: Option<PowerState>,
    pub billing_item: Option<BillingItem>,
    pub tag_references: Option<Vec<TagReference>>,
}

impl VirtualGuest {
    pub fn datacenter_name(&self) -> Option<&str> {
        self.datacenter.as_ref()?.name.as_deref()
    }

    /// Name of the transaction currently running on the guest
    pub fn action(&self) -> Option<&str> {
        self.active_transaction
            .as_ref()?
            .transaction_status
            .as_ref()?
            .name
            .as_deref()
    }

    pub fn power_state_name(&self) -> Option<&str> {
        self.power_state.as_ref()?.name.as_deref()
    }
}
