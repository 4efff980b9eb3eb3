//! HR policy store
//!
//! Named blocks of policy text, keyed by lower-case policy name.

use std::collections::BTreeMap;

/// Reply when a policy name is not in the store
pub const POLICY_NOT_FOUND: &str = "Policy not found. Please contact HR for more details.";

pub const WORKING_HOURS: &str = "working_hours";
pub const LEAVE_POLICY: &str = "leave_policy";
pub const PROBATION_PERIOD: &str = "probation_period";

/// Immutable policy name -> policy text table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStore {
    entries: BTreeMap<String, String>,
}

impl PolicyStore {
    /// Built-in company policies
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                WORKING_HOURS,
                "Our standard working hours are 9:30 AM to 6:30 PM, Monday to Friday.",
            ),
            (
                LEAVE_POLICY,
                "Employees are entitled to 20 days of paid leave per year, including casual and sick leave.",
            ),
            (
                PROBATION_PERIOD,
                "The probation period is 6 months from the date of joining.",
            ),
        ])
    }

    /// Build a store from (name, text) pairs. Names are stored lower-case.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, text)| (name.to_lowercase(), text.to_string()))
                .collect(),
        }
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Policy text, or the not-found reply
    pub fn get_policy(&self, name: &str) -> String {
        self.lookup(name).unwrap_or(POLICY_NOT_FOUND).to_string()
    }

    /// Policy names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::builtin()
    }
}
