use std::process;

use tracing_subscriber::EnvFilter;

/// Exits the program with an error message and usage information
pub fn exit_with_usage_error(message: &str, usage: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!("{}", usage);
    process::exit(1);
}

/// Exits the program after printing an already formatted message
pub fn exit_with_message(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Prints each line to stdout
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Installs a stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or debug output
/// when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
