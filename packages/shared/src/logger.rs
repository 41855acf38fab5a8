//! Logging setup utilities for the Zashiki binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the Zashiki library crates and the calling binary log at
/// `default_log_level`. The filter can be overridden with the `RUST_LOG`
/// environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "zashiki_server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use zashiki_shared::logger::setup_logger;
///
/// setup_logger("zashiki_server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    format!(
        "zashiki_server={level},zashiki_client={level},zashiki_shared={level},{binary}={level},tower_http={level}",
        level = default_log_level,
        binary = binary_target,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_normalizes_binary_name() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // given (前提条件):
        let binary_name = "zashiki-server";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert!(filter.contains("zashiki_server=info"));
        assert!(!filter.contains("zashiki-server"));
    }

    #[test]
    fn test_default_filter_applies_level_to_every_crate() {
        // テスト項目: すべてのクレートに同じログレベルが適用される
        // given (前提条件):

        // when (操作):
        let filter = default_filter("zashiki_client", "warn");

        // then (期待する結果):
        for directive in filter.split(',') {
            assert!(directive.ends_with("=warn"), "unexpected directive: {directive}");
        }
    }
}
