//! HR Desk common library
//!
//! Policy and leave tables, email templates, the query router and the
//! configuration shared by the `hrdeskctl` front end.

pub mod config;
pub mod directory;
pub mod email;
pub mod error;
pub mod leave;
pub mod policy;
pub mod prompt;
pub mod router;

pub use config::HrDeskConfig;
pub use directory::HrDirectory;
pub use email::{draft_email_reply, EmailPurpose, Tone};
pub use error::HrDeskError;
pub use leave::{LeaveRecord, LeaveStore};
pub use policy::PolicyStore;
pub use router::{Intent, Route, Router, RouterConfig, Rule};
