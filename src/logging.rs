//! Logging setup for rigpanel
//!
//! Thin wrapper over `env_logger` with local timestamps. `RUST_LOG` selects
//! the level; the default is `info`.

use std::io::Write;
use std::sync::Once;

use chrono::Local;

/// Timestamp format for log entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Global initialization guard
static INIT_LOGGER: Once = Once::new();

/// Initialize the global logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        env_logger::Builder::from_env(env)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {:5} [{}] {}",
                    Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .init();
    });
}
