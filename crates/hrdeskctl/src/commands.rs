//! Command handlers
//!
//! Resolve settings from config and flags, then render each subcommand as
//! plain text or the JSON envelope. All output goes through the writer
//! passed in. In JSON mode the journal falls back to stderr instead.

use crate::cli::{Cli, Commands};
use crate::demo::{self, Exchange, SAMPLE_QUERIES};
use crate::logging::{JournalFallback, Recorder};
use crate::output::write_json;
use anyhow::{Context, Result};
use hrdesk_common::prompt::{tool_catalogue, ToolSpec, SYSTEM_PROMPT, TOOLS_DESCRIPTION};
use hrdesk_common::{draft_email_reply, HrDeskConfig, HrDirectory, Intent, Router, Tone};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Resolved runtime settings plus the HR tables
#[derive(Debug, Clone)]
pub struct Desk {
    directory: HrDirectory,
    config: HrDeskConfig,
    json: bool,
    recorder: Recorder,
}

#[derive(Serialize)]
struct PolicyOut<'a> {
    name: &'a str,
    found: bool,
    text: String,
}

#[derive(Serialize)]
struct LeaveOut<'a> {
    employee_id: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<i64>,
    reply: String,
}

#[derive(Serialize)]
struct EmailOut<'a> {
    purpose: &'a str,
    tone: Tone,
    reply: String,
}

#[derive(Serialize)]
struct PromptOut {
    system_prompt: &'static str,
    tools: Vec<ToolSpec>,
}

#[derive(Serialize)]
struct RuleOut {
    position: usize,
    intent: Intent,
    pattern: &'static str,
}

impl Desk {
    pub fn new(config: HrDeskConfig) -> Self {
        let json = config.output.json;
        let recorder = Recorder {
            interactions: config.log.interactions && !json,
            journal: config.log.journal,
            journal_fallback: if json {
                JournalFallback::Stderr
            } else {
                JournalFallback::Output
            },
        };
        Self {
            directory: HrDirectory::builtin(),
            config,
            json,
            recorder,
        }
    }

    /// Load config, then let command-line flags override it
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = HrDeskConfig::load(cli.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(employee) = &cli.employee {
            config.router.demo_employee = employee.clone();
        }
        config.output.json |= cli.json;
        config.log.interactions |= cli.log_interactions;
        config.log.journal |= cli.journal;

        if config.output.json && config.log.interactions {
            debug!("interaction records suppressed in JSON mode");
        }

        Ok(Self::new(config))
    }

    pub fn router(&self) -> Router<'_> {
        Router::new(&self.directory, self.config.router.clone())
    }

    pub fn run(&self, command: Option<&Commands>, out: &mut impl Write) -> Result<()> {
        match command {
            None | Some(Commands::Demo) => self.demo(out),
            Some(Commands::Ask { query }) => self.ask(&query.join(" "), out),
            Some(Commands::Policy { name, list }) => {
                if *list {
                    self.policy_list(out)
                } else {
                    self.policy(name.as_deref().unwrap_or_default(), out)
                }
            }
            Some(Commands::Leave { employee_id }) => self.leave(employee_id, out),
            Some(Commands::Email { purpose, tone }) => self.email(purpose, *tone, out),
            Some(Commands::Prompt) => self.prompt(out),
            Some(Commands::Rules) => self.rules(out),
        }
    }

    pub fn demo(&self, out: &mut impl Write) -> Result<()> {
        let router = self.router();
        let exchanges = demo::run_queries(&router, SAMPLE_QUERIES);

        if self.json {
            for exchange in &exchanges {
                self.recorder.record(out, exchange)?;
            }
            return write_json(out, &exchanges);
        }

        for exchange in &exchanges {
            demo::write_exchange(out, exchange).context("Failed to write transcript")?;
            self.recorder.record(out, exchange)?;
            demo::write_separator(out).context("Failed to write transcript")?;
        }
        Ok(())
    }

    pub fn ask(&self, query: &str, out: &mut impl Write) -> Result<()> {
        let exchange = Exchange::route(&self.router(), query);
        self.recorder.record(out, &exchange)?;

        if self.json {
            return write_json(out, &exchange);
        }
        demo::write_exchange(out, &exchange).context("Failed to write reply")?;
        Ok(())
    }

    pub fn policy(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let found = self.directory.policies.lookup(name).is_some();
        let text = self.directory.policies.get_policy(name);
        if self.json {
            return write_json(
                out,
                PolicyOut {
                    name,
                    found,
                    text,
                },
            );
        }
        writeln!(out, "{}", text)?;
        Ok(())
    }

    pub fn policy_list(&self, out: &mut impl Write) -> Result<()> {
        let names: Vec<&str> = self.directory.policies.names().collect();
        if self.json {
            return write_json(out, names);
        }
        for name in names {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    pub fn leave(&self, employee_id: &str, out: &mut impl Write) -> Result<()> {
        let record = self.directory.leave.lookup(employee_id);
        let reply = self.directory.leave.get_leave_balance(employee_id);
        if self.json {
            return write_json(
                out,
                LeaveOut {
                    employee_id,
                    found: record.is_some(),
                    name: record.map(|r| r.name.as_str()),
                    remaining: record.map(|r| r.remaining()),
                    reply,
                },
            );
        }
        writeln!(out, "{}", reply)?;
        Ok(())
    }

    pub fn email(&self, purpose: &str, tone: Tone, out: &mut impl Write) -> Result<()> {
        let reply = draft_email_reply(purpose, tone);
        if self.json {
            return write_json(
                out,
                EmailOut {
                    purpose,
                    tone,
                    reply,
                },
            );
        }
        writeln!(out, "{}", reply)?;
        Ok(())
    }

    pub fn prompt(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            return write_json(
                out,
                PromptOut {
                    system_prompt: SYSTEM_PROMPT,
                    tools: tool_catalogue(),
                },
            );
        }
        writeln!(out, "{}\n\n{}", SYSTEM_PROMPT, TOOLS_DESCRIPTION)?;
        Ok(())
    }

    pub fn rules(&self, out: &mut impl Write) -> Result<()> {
        let rules: Vec<RuleOut> = Router::rules()
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleOut {
                position: i + 1,
                intent: rule.intent,
                pattern: rule.pattern,
            })
            .collect();

        if self.json {
            return write_json(out, rules);
        }
        for rule in rules {
            writeln!(out, "{}\t{}\t{}", rule.position, rule.intent, rule.pattern)?;
        }
        writeln!(out, "-\t{}\t(no match)", Intent::Unknown)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_common::policy::POLICY_NOT_FOUND;
    use hrdesk_common::router::FALLBACK_REPLY;

    fn text_desk() -> Desk {
        Desk::new(HrDeskConfig::default())
    }

    fn json_desk() -> Desk {
        let mut config = HrDeskConfig::default();
        config.output.json = true;
        Desk::new(config)
    }

    fn render(desk: &Desk, command: Option<&Commands>) -> String {
        let mut buf = Vec::new();
        desk.run(command, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_command_is_demo() {
        let desk = text_desk();
        assert_eq!(render(&desk, None), render(&desk, Some(&Commands::Demo)));
    }

    #[test]
    fn test_transcript_exact() {
        let sep = "-".repeat(40);
        let expected = format!(
            "USER: What are the working hours?\n\
             AGENT: Our standard working hours are 9:30 AM to 6:30 PM, Monday to Friday.\n\
             {sep}\n\
             USER: Tell me about the leave policy.\n\
             AGENT: Employees are entitled to 20 days of paid leave per year, including casual and sick leave.\n\
             {sep}\n\
             USER: How many leaves do I have left?\n\
             AGENT: Asha Verma has 12 days of leave remaining.\n\
             {sep}\n\
             USER: Can you draft an email for leave request?\n\
             AGENT: Subject: Leave Request\n\nDear [Manager Name],\n\n\
             I would like to request leave from [start date] to [end date]. \
             Please let me know if this works or if any adjustments are needed.\n\n\
             Regards,\n[Your Name]\n\
             {sep}\n\
             USER: What is the probation period?\n\
             AGENT: The probation period is 6 months from the date of joining.\n\
             {sep}\n\
             USER: Give me my salary details.\n\
             AGENT: {FALLBACK_REPLY}\n\
             {sep}\n"
        );
        assert_eq!(render(&text_desk(), None), expected);
    }

    #[test]
    fn test_ask_joins_words() {
        let out = render(
            &text_desk(),
            Some(&Commands::Ask {
                query: vec!["what".into(), "is".into(), "probation?".into()],
            }),
        );
        assert_eq!(
            out,
            "USER: what is probation?\nAGENT: The probation period is 6 months from the date of joining.\n"
        );
    }

    #[test]
    fn test_ask_json() {
        let out = render(
            &json_desk(),
            Some(&Commands::Ask {
                query: vec!["salary".into()],
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["intent"], "unknown");
    }

    #[test]
    fn test_policy_lookup_and_fallback() {
        let desk = text_desk();
        let out = render(
            &desk,
            Some(&Commands::Policy {
                name: Some("LEAVE_POLICY".into()),
                list: false,
            }),
        );
        assert!(out.starts_with("Employees are entitled to 20 days"));

        let out = render(
            &json_desk(),
            Some(&Commands::Policy {
                name: Some("dress_code".into()),
                list: false,
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["found"], false);
        assert_eq!(value["data"]["text"], POLICY_NOT_FOUND);
    }

    #[test]
    fn test_policy_list() {
        let out = render(
            &text_desk(),
            Some(&Commands::Policy {
                name: None,
                list: true,
            }),
        );
        assert_eq!(out, "leave_policy\nprobation_period\nworking_hours\n");
    }

    #[test]
    fn test_leave_json() {
        let out = render(
            &json_desk(),
            Some(&Commands::Leave {
                employee_id: "emp003".into(),
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["remaining"], -2);
        assert_eq!(value["data"]["name"], "Priya Nair");

        let out = render(
            &json_desk(),
            Some(&Commands::Leave {
                employee_id: "EMP404".into(),
            }),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["found"], false);
        assert!(value["data"].get("remaining").is_none());
    }

    #[test]
    fn test_email_unknown_purpose() {
        let out = render(
            &text_desk(),
            Some(&Commands::Email {
                purpose: "farewell".into(),
                tone: Tone::Friendly,
            }),
        );
        assert_eq!(out, "Template not available for this purpose.\n");
    }

    #[test]
    fn test_demo_employee_override() {
        let mut config = HrDeskConfig::default();
        config.router.demo_employee = "EMP002".into();
        let desk = Desk::new(config);
        let out = render(
            &desk,
            Some(&Commands::Ask {
                query: vec!["leave balance".into()],
            }),
        );
        assert!(out.contains("AGENT: Rahul Mehta has 5 days of leave remaining."));
    }

    #[test]
    fn test_demo_with_interaction_records() {
        let mut config = HrDeskConfig::default();
        config.log.interactions = true;
        let out = render(&Desk::new(config), None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "USER: What are the working hours?");
        assert!(lines[2].starts_with('[') && lines[2].contains("] USER: What are the working hours?"));
        assert!(lines[3].contains("] AGENT: Our standard working hours"));
        assert_eq!(lines[4], "-".repeat(40));
    }

    #[test]
    fn test_json_suppresses_interaction_records() {
        let mut config = HrDeskConfig::default();
        config.log.interactions = true;
        config.output.json = true;
        let out = render(&Desk::new(config), None);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), SAMPLE_QUERIES.len());
    }

    #[test]
    fn test_rules_listing() {
        let out = render(&text_desk(), Some(&Commands::Rules));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("1\tworking_hours\t"));
        assert!(lines[4].starts_with("5\tleave_email\t"));
        assert_eq!(lines[5], "-\tunknown\t(no match)");
    }

    #[test]
    fn test_prompt_text() {
        let out = render(&text_desk(), Some(&Commands::Prompt));
        assert!(out.starts_with("You are an internal HR assistant for an enterprise."));
        assert!(out.contains("3. draft_email_reply(purpose, tone)"));
    }
}
