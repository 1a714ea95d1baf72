use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::model::LogFormat;

// tower_http is raised with us so TraceLayer spans show up in verbose mode.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "extenso=debug,tower_http=debug,info"
    } else {
        "extenso=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = default_filter(verbose);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        // one object per line, for log collectors
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "extenso=info");
        assert_eq!(
            default_directives(true),
            "extenso=debug,tower_http=debug,info"
        );
        // both parse as filters
        let _ = EnvFilter::try_new(default_directives(true)).unwrap();
        let _ = EnvFilter::try_new(default_directives(false)).unwrap();
    }
}
