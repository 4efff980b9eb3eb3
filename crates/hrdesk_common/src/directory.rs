//! HR directory: the policy and leave tables handed to the router

use crate::leave::LeaveStore;
use crate::policy::PolicyStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrDirectory {
    pub policies: PolicyStore,
    pub leave: LeaveStore,
}

impl HrDirectory {
    pub fn new(policies: PolicyStore, leave: LeaveStore) -> Self {
        Self { policies, leave }
    }

    /// Built-in policies and demo leave records
    pub fn builtin() -> Self {
        Self::new(PolicyStore::builtin(), LeaveStore::builtin())
    }
}
