//! Exit status for hrdeskctl
//!
//! Unknown policies, employees and queries still exit with success; they
//! are answered with a fallback reply.

use hrdesk_common::HrDeskError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when stdout or the journal cannot be written
pub const EXIT_IO_ERROR: i32 = 74;

/// Exit code when the config file is unreadable or invalid
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map an error chain to an exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<HrDeskError>() {
            return match e {
                HrDeskError::ConfigRead { .. }
                | HrDeskError::ConfigParse { .. }
                | HrDeskError::NoHome => EXIT_CONFIG_ERROR,
            };
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return EXIT_IO_ERROR;
        }
    }
    EXIT_GENERAL_ERROR
}
