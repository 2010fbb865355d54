//! Logger setup for both targets.
//!
//! Library code only talks to the `log` facade. Natively the preview binary
//! installs `env_logger` (filtered by `RUST_LOG`); in the browser log records
//! go to the developer console.

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
#[cfg(target_arch = "wasm32")]
pub use console::*;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use log::LevelFilter;

    /// Filter used when `RUST_LOG` is unset, by `-v` count.
    pub fn default_level(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install `env_logger` writing to stderr. `RUST_LOG` wins over `verbosity`.
    /// Calling this twice is harmless.
    pub fn init(verbosity: u8) {
        let env = env_logger::Env::default()
            .default_filter_or(default_level(verbosity).as_str().to_ascii_lowercase());
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .try_init();
    }

    /// Logs how long a scope took at debug level when dropped.
    pub struct Timer {
        label: &'static str,
        start: Instant,
    }

    impl Timer {
        /// Start a timer, or `None` if debug logging is off.
        #[inline]
        pub fn start(label: &'static str) -> Option<Self> {
            log::log_enabled!(log::Level::Debug).then(|| Self {
                label,
                start: Instant::now(),
            })
        }

        /// Time since start.
        pub fn elapsed(&self) -> Duration {
            self.start.elapsed()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            log::debug!("{}: {:?}", self.label, self.elapsed());
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Route `log` records to the browser console. Calling this twice is harmless.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}
