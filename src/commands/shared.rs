//! # Shared Command Utilities
//!
//! Argument-count checks used by the command handlers.

use crate::cli_utils;

/// Validates both minimum and maximum argument counts.
///
/// # Arguments
/// * `args` - The command arguments array
/// * `min_count` - The minimum number of arguments required (including subcommand)
/// * `max_count` - The maximum number of arguments allowed (including subcommand)
/// * `command` - The command name for error message
/// * `usage` - The usage string to display
pub fn validate_args_count_or_exit(
    args: &[String],
    min_count: usize,
    max_count: usize,
    command: &str,
    usage: &str,
) {
    if let Err(message) = check_args_count(args, min_count, max_count, command) {
        cli_utils::exit_with_usage_error(&message, usage);
    }
}

fn check_args_count(
    args: &[String],
    min_count: usize,
    max_count: usize,
    command: &str,
) -> Result<(), String> {
    if args.len() < min_count {
        return Err(format!("{} command requires more arguments", command));
    }
    if args.len() > max_count {
        return Err(format!("{} command has too many arguments", command));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn arg_count_bounds() {
        assert!(check_args_count(&args(&["get", "c1"]), 2, 2, "get").is_ok());
        assert_eq!(
            check_args_count(&args(&["get"]), 2, 2, "get"),
            Err("get command requires more arguments".to_string())
        );
        assert_eq!(
            check_args_count(&args(&["list", "extra"]), 1, 1, "list"),
            Err("list command has too many arguments".to_string())
        );
    }
}
