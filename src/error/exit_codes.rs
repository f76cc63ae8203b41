use crate::error::LocatorError;

pub fn get_exit_code(error: &LocatorError) -> i32 {
    match error {
        LocatorError::ConfigError(_) | LocatorError::InvalidOverride(_) => 2,

        LocatorError::ToolMissing { .. } | LocatorError::AmbiguousTool { .. } => 5,

        LocatorError::PermissionFailure { .. } => 13,

        LocatorError::ToolNotLocated { .. } => 127, // Standard "command not found" exit code

        _ => 1,
    }
}
