use thiserror::Error;

/// Suffix a directory entry needs to be listed as a log.
pub const LOG_SUFFIX: &str = ".txt";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct InvalidLogName(pub String);

/// Reject names that could resolve outside the logs directory.
///
/// A valid name is a single non-empty path component other than `.` or `..`.
pub fn validate_log_name(name: &str) -> Result<(), InvalidLogName> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if bad {
        return Err(InvalidLogName(name.to_string()));
    }
    Ok(())
}

pub fn is_log_file(name: &str) -> bool {
    name.ends_with(LOG_SUFFIX)
}
