//! Email reply templates
//!
//! Two fixed templates with bracketed placeholders. Tone is accepted for
//! callers that pass one but does not change the text.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Reply for an unrecognised purpose tag
pub const TEMPLATE_NOT_AVAILABLE: &str = "Template not available for this purpose.";

const LEAVE_REQUEST_TEMPLATE: &str = "Subject: Leave Request\n\n\
Dear [Manager Name],\n\n\
I would like to request leave from [start date] to [end date]. \
Please let me know if this works or if any adjustments are needed.\n\n\
Regards,\n[Your Name]";

const POLICY_CLARIFICATION_TEMPLATE: &str = "Subject: HR Policy Clarification\n\n\
Dear HR Team,\n\n\
I would like to clarify details regarding the [policy name] policy.\n\n\
Thank you,\n[Your Name]";

/// Recognised email purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPurpose {
    LeaveRequest,
    PolicyClarification,
}

impl EmailPurpose {
    pub fn tag(&self) -> &'static str {
        match self {
            EmailPurpose::LeaveRequest => "leave_request",
            EmailPurpose::PolicyClarification => "policy_clarification",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            EmailPurpose::LeaveRequest => LEAVE_REQUEST_TEMPLATE,
            EmailPurpose::PolicyClarification => POLICY_CLARIFICATION_TEMPLATE,
        }
    }
}

impl FromStr for EmailPurpose {
    type Err = String;

    /// Tags are matched exactly, without case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leave_request" => Ok(EmailPurpose::LeaveRequest),
            "policy_clarification" => Ok(EmailPurpose::PolicyClarification),
            other => Err(format!("unknown email purpose: '{}'", other)),
        }
    }
}

impl fmt::Display for EmailPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Requested tone of a drafted email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Polite,
    Formal,
    Friendly,
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polite" => Ok(Tone::Polite),
            "formal" => Ok(Tone::Formal),
            "friendly" => Ok(Tone::Friendly),
            other => Err(format!(
                "Invalid tone: '{}'. Valid values: polite, formal, friendly",
                other
            )),
        }
    }
}

/// Template for `purpose`, or the not-available reply
pub fn draft_email_reply(purpose: &str, _tone: Tone) -> String {
    match purpose.parse::<EmailPurpose>() {
        Ok(purpose) => purpose.template().to_string(),
        Err(_) => TEMPLATE_NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_request_template() {
        let reply = draft_email_reply("leave_request", Tone::Polite);
        assert!(reply.starts_with("Subject: Leave Request\n\nDear [Manager Name],\n\n"));
        assert!(reply.contains("from [start date] to [end date]. Please let me know"));
        assert!(reply.ends_with("Regards,\n[Your Name]"));
    }

    #[test]
    fn test_policy_clarification_template() {
        let reply = draft_email_reply("policy_clarification", Tone::default());
        assert_eq!(
            reply,
            "Subject: HR Policy Clarification\n\nDear HR Team,\n\n\
             I would like to clarify details regarding the [policy name] policy.\n\n\
             Thank you,\n[Your Name]"
        );
    }

    #[test]
    fn test_tone_has_no_effect() {
        assert_eq!(
            draft_email_reply("leave_request", Tone::Formal),
            draft_email_reply("leave_request", Tone::Friendly)
        );
    }

    #[test]
    fn test_unknown_purpose() {
        assert_eq!(draft_email_reply("resignation", Tone::Polite), TEMPLATE_NOT_AVAILABLE);
        assert_eq!(draft_email_reply("LEAVE_REQUEST", Tone::Polite), TEMPLATE_NOT_AVAILABLE);
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!("Formal".parse::<Tone>(), Ok(Tone::Formal));
        assert!("angry".parse::<Tone>().is_err());
    }
}
