//! Diagnostics and error reporting for moonsim
//!
//! Formatting helpers for the messages printed to stderr.

use std::path::Path;

/// Format a failure to read the input file
pub fn format_read_error(path: &Path, error: &dyn std::error::Error) -> String {
    format!("cannot read {}: {}", path.display(), error)
}

/// Format a runtime error, including its chain of causes
pub fn format_runtime_error(error: &dyn std::error::Error) -> String {
    let mut msg = format!("Error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::SimulationError;
    use crate::runtime::MoonsimError;
    use std::io;

    #[test]
    fn read_error_names_the_file() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        assert_eq!(
            format_read_error(Path::new("moons.txt"), &err),
            "cannot read moons.txt: no such file"
        );
    }

    #[test]
    fn runtime_error_is_prefixed() {
        let err = SimulationError::CycleNotFound { limit: 3 };
        assert_eq!(
            format_runtime_error(&err),
            "Error: no cycle found on every axis within 3 steps"
        );
    }

    #[test]
    fn transparent_wrapper_is_not_repeated() {
        let err = MoonsimError::from(SimulationError::CycleNotFound { limit: 3 });
        assert_eq!(
            format_runtime_error(&err),
            "Error: no cycle found on every axis within 3 steps"
        );
    }
}
