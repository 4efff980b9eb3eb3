//! Query Router - free text to canned HR reply
//!
//! The query is lower-cased and tested against an ordered rule table.
//! The first rule whose predicate matches produces the reply; nothing is
//! remembered between calls.

use crate::directory::HrDirectory;
use crate::email::EmailPurpose;
use crate::policy::{LEAVE_POLICY, PROBATION_PERIOD, WORKING_HOURS};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Reply when no rule matches
pub const FALLBACK_REPLY: &str = "I'm not sure about this. Please contact HR for detailed assistance.";

/// Employee reported by the leave-balance rule unless configured otherwise
pub const DEFAULT_DEMO_EMPLOYEE: &str = "EMP001";

/// Which rule answered a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    WorkingHours,
    LeavePolicy,
    Probation,
    LeaveBalance,
    LeaveEmail,
    /// No rule matched
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::WorkingHours => "working_hours",
            Intent::LeavePolicy => "leave_policy",
            Intent::Probation => "probation",
            Intent::LeaveBalance => "leave_balance",
            Intent::LeaveEmail => "leave_email",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Router settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Employee whose balance the leave-balance rule reports
    #[serde(default = "default_demo_employee")]
    pub demo_employee: String,
}

fn default_demo_employee() -> String {
    DEFAULT_DEMO_EMPLOYEE.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            demo_employee: default_demo_employee(),
        }
    }
}

/// One (predicate, handler) entry of the routing table
#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    /// Human-readable form of the predicate
    pub pattern: &'static str,
    /// Tested against the lower-cased query
    pub matches: fn(&str) -> bool,
    pub respond: fn(&HrDirectory, &RouterConfig) -> String,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("intent", &self.intent)
            .field("pattern", &self.pattern)
            .finish()
    }
}

static RULES: &[Rule] = &[
    Rule {
        intent: Intent::WorkingHours,
        pattern: "\"working hours\" or \"timing\"",
        matches: asks_working_hours,
        respond: working_hours_reply,
    },
    Rule {
        intent: Intent::LeavePolicy,
        pattern: "\"leave policy\"",
        matches: asks_leave_policy,
        respond: leave_policy_reply,
    },
    Rule {
        intent: Intent::Probation,
        pattern: "\"probation\"",
        matches: asks_probation,
        respond: probation_reply,
    },
    Rule {
        intent: Intent::LeaveBalance,
        pattern: "\"leave balance\" or \"how many leaves\"",
        matches: asks_leave_balance,
        respond: leave_balance_reply,
    },
    Rule {
        intent: Intent::LeaveEmail,
        pattern: "\"email\" and \"leave\"",
        matches: asks_leave_email,
        respond: leave_email_reply,
    },
];

fn asks_working_hours(q: &str) -> bool {
    q.contains("working hours") || q.contains("timing")
}

fn asks_leave_policy(q: &str) -> bool {
    q.contains("leave policy")
}

fn asks_probation(q: &str) -> bool {
    q.contains("probation")
}

fn asks_leave_balance(q: &str) -> bool {
    q.contains("leave balance") || q.contains("how many leaves")
}

fn asks_leave_email(q: &str) -> bool {
    q.contains("email") && q.contains("leave")
}

fn working_hours_reply(dir: &HrDirectory, _: &RouterConfig) -> String {
    dir.policies.get_policy(WORKING_HOURS)
}

fn leave_policy_reply(dir: &HrDirectory, _: &RouterConfig) -> String {
    dir.policies.get_policy(LEAVE_POLICY)
}

fn probation_reply(dir: &HrDirectory, _: &RouterConfig) -> String {
    dir.policies.get_policy(PROBATION_PERIOD)
}

// The query never names an employee; the configured demo employee stands in.
fn leave_balance_reply(dir: &HrDirectory, config: &RouterConfig) -> String {
    dir.leave.get_leave_balance(&config.demo_employee)
}

fn leave_email_reply(_: &HrDirectory, _: &RouterConfig) -> String {
    EmailPurpose::LeaveRequest.template().to_string()
}

/// Routing decision for a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub intent: Intent,
    pub reply: String,
}

/// Routes queries against an immutable HR directory
#[derive(Debug, Clone)]
pub struct Router<'a> {
    directory: &'a HrDirectory,
    config: RouterConfig,
}

impl<'a> Router<'a> {
    pub fn new(directory: &'a HrDirectory, config: RouterConfig) -> Self {
        Self { directory, config }
    }

    /// The routing table in evaluation order
    pub fn rules() -> &'static [Rule] {
        RULES
    }

    /// First rule matching `query`, if any
    pub fn classify(query: &str) -> Option<&'static Rule> {
        let lower = query.to_lowercase();
        RULES.iter().find(|rule| (rule.matches)(&lower))
    }

    pub fn route(&self, query: &str) -> Route {
        match Self::classify(query) {
            Some(rule) => {
                debug!(intent = %rule.intent, "query matched rule");
                Route {
                    intent: rule.intent,
                    reply: (rule.respond)(self.directory, &self.config),
                }
            }
            None => {
                debug!("no rule matched, returning fallback");
                Route {
                    intent: Intent::Unknown,
                    reply: FALLBACK_REPLY.to_string(),
                }
            }
        }
    }

    pub fn answer(&self, query: &str) -> String {
        self.route(query).reply
    }
}
