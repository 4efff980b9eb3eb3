use clap::{Parser, Subcommand};
use hrdesk_common::Tone;
use std::path::PathBuf;

const VERSION: &str = env!("HRDESK_VERSION");

#[derive(Parser, Debug)]
#[command(name = "hrdeskctl", version = VERSION, about = "HR Desk - keyword-routed HR assistant")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        help = "Print timestamped USER/AGENT records for each exchange"
    )]
    pub log_interactions: bool,

    #[arg(long, global = true, help = "Append each exchange to the interaction journal")]
    pub journal: bool,

    #[arg(
        long,
        global = true,
        value_name = "ID",
        help = "Employee reported for leave-balance questions"
    )]
    pub employee: Option<String>,

    #[arg(long, global = true, value_name = "PATH", help = "Config file to load")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sample queries and print the transcript
    Demo,

    /// Route a single free-text query
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Look up a policy by name
    Policy {
        #[arg(required_unless_present = "list")]
        name: Option<String>,
        #[arg(long, conflicts_with = "name", help = "List policy names")]
        list: bool,
    },

    /// Look up an employee's remaining leave
    Leave { employee_id: String },

    /// Print an email template
    Email {
        /// leave_request or policy_clarification
        purpose: String,
        /// Accepted for compatibility; templates do not vary by tone
        #[arg(long, default_value = "polite")]
        tone: Tone,
    },

    /// Print the assistant system prompt and tool list
    Prompt,

    /// Print the routing table in evaluation order
    Rules,
}
