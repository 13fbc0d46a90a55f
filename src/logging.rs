use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,menagerie=debug"
    } else {
        "warn,menagerie=info"
    }
}

/// Wire up tracing for a CLI run.
///
/// Stderr gets compact human-readable output; `RUST_LOG` overrides the
/// default filter entirely, otherwise other crates are capped at `warn`.
/// When a log file is given, a second layer appends JSON lines to exactly
/// that file. Invocations are one-shot, so there is no rotation and no
/// background writer to flush.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::new(default_directives(verbose)),
    };

    let registry = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    let Some(path) = log_file else {
        registry.init();
        return;
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let _ = std::fs::create_dir_all(dir);
    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("menagerie.log"));

    // `never` = plain append, the file keeps the name the user asked for
    let appender = tracing_appender::rolling::never(dir, file_name);
    registry
        .with(fmt::layer().json().with_ansi(false).with_writer(appender))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse_as_filters() {
        for verbose in [false, true] {
            EnvFilter::try_new(default_directives(verbose)).unwrap();
        }
    }

    #[test]
    fn test_verbose_raises_only_our_level() {
        assert_eq!(default_directives(false), "warn,menagerie=info");
        assert_eq!(default_directives(true), "warn,menagerie=debug");
    }
}
