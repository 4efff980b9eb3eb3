//! Assistant prompt text and tool catalogue
//!
//! The instructions and tool list an LLM-backed HR agent would be given.
//! The keyword router does not consume them; `hrdeskctl prompt` prints them.

use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are an internal HR assistant for an enterprise.
- Answer only HR-related queries based on company policies.
- Be concise, polite, and neutral.
- If you do not know the answer or policy is not defined, say so and suggest contacting HR.
- Never invent legal or medical advice.";

pub const TOOLS_DESCRIPTION: &str = "Tools you can use:
1. get_policy(policy_name): Returns the text of the requested HR policy.
2. get_leave_balance(employee_id): Returns remaining leave days for the employee.
3. draft_email_reply(purpose, tone): Returns a short email template.

Use tools when needed instead of guessing.";

/// One tool the assistant may call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub description: &'static str,
}

pub fn tool_catalogue() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "get_policy",
            params: &["policy_name"],
            description: "Returns the text of the requested HR policy.",
        },
        ToolSpec {
            name: "get_leave_balance",
            params: &["employee_id"],
            description: "Returns remaining leave days for the employee.",
        },
        ToolSpec {
            name: "draft_email_reply",
            params: &["purpose", "tone"],
            description: "Returns a short email template.",
        },
    ]
}
