//! Employee leave records

use std::collections::BTreeMap;

/// Reply when an employee id is not in the leave records
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found in leave records.";

/// Annual leave totals for one employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRecord {
    pub name: String,
    pub total_leaves: u32,
    pub used_leaves: u32,
}

impl LeaveRecord {
    pub fn new(name: &str, total_leaves: u32, used_leaves: u32) -> Self {
        Self {
            name: name.to_string(),
            total_leaves,
            used_leaves,
        }
    }

    /// Total minus used. Goes negative when leave is over-drawn.
    pub fn remaining(&self) -> i64 {
        i64::from(self.total_leaves) - i64::from(self.used_leaves)
    }

    /// "<name> has <n> days of leave remaining."
    pub fn balance_sentence(&self) -> String {
        format!(
            "{} has {} days of leave remaining.",
            self.name,
            self.remaining()
        )
    }
}

/// Immutable employee id -> leave record table, keyed upper-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveStore {
    records: BTreeMap<String, LeaveRecord>,
}

impl LeaveStore {
    /// Demo leave records
    pub fn builtin() -> Self {
        Self::from_records([
            ("EMP001", LeaveRecord::new("Asha Verma", 20, 8)),
            ("EMP002", LeaveRecord::new("Rahul Mehta", 20, 15)),
            ("EMP003", LeaveRecord::new("Priya Nair", 18, 20)),
        ])
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = (&'a str, LeaveRecord)>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|(id, record)| (id.to_uppercase(), record))
                .collect(),
        }
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, employee_id: &str) -> Option<&LeaveRecord> {
        self.records.get(&employee_id.to_uppercase())
    }

    /// Balance sentence, or the not-found reply
    pub fn get_leave_balance(&self, employee_id: &str) -> String {
        match self.lookup(employee_id) {
            Some(record) => record.balance_sentence(),
            None => EMPLOYEE_NOT_FOUND.to_string(),
        }
    }
}

impl Default for LeaveStore {
    fn default() -> Self {
        Self::builtin()
    }
}
