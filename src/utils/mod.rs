pub mod build_info;
pub mod paths;
pub mod persistence;

use std::sync::Once;

/// Formats `value` with `precision` decimals. Values that round to zero print
/// without a sign.
pub fn format_fixed(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honoured; `spending_chart=info` is always added.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive(
            "spending_chart=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        );

        // A subscriber installed by the embedding host wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::format_fixed;

    #[test]
    fn rounded_zero_has_no_sign() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.3, 0), "0");
        assert_eq!(format_fixed(-0.004, 2), "0.00");
    }

    #[test]
    fn real_negatives_keep_their_sign() {
        assert_eq!(format_fixed(-1.5, 2), "-1.50");
        assert_eq!(format_fixed(-0.7, 0), "-1");
        assert_eq!(format_fixed(12.345, 1), "12.3");
    }
}
