use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "caeli",
    "caeli_calendar",
    "caeli_distribution",
    "caeli_index",
    "caeli_io",
    "caeli_stats",
];

/// Filter directive for a CLI verbosity count: warn, `-v` info, `-vv`
/// debug, `-vvv` trace, each scoped to the workspace crates.
fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr, keeping stdout for index output.
///
/// `RUST_LOG` overrides the CLI verbosity if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert!(default_directives(0).starts_with("caeli=warn,"));
        assert!(default_directives(1).contains("caeli_index=info"));
        assert!(default_directives(2).contains("caeli_io=debug"));
        assert!(default_directives(7).ends_with("caeli_stats=trace"));
    }
}
