//! Browser console logging
//!
//! Routes `tracing` output through a `tracing-subscriber` fmt layer whose
//! writer hands each formatted event to the matching `console` method.

use std::io;

use letsgo_common::config::LoggingConfig;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and emits it on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buf);
        let message = JsValue::from_str(line.trim_end());

        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            _ => console::log_1(&message),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &LoggingConfig) {
    let level = config.level.parse::<LevelFilter>().unwrap_or_else(|_| {
        console::warn_1(&JsValue::from_str(&format!(
            "Unknown log level {:?}, falling back to info",
            config.level
        )));
        LevelFilter::INFO
    });

    // No clock access in the browser, no ANSI colors in the console
    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter);

    if tracing_subscriber::registry()
        .with(level)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        console::warn_1(&JsValue::from_str("Logging was already initialized"));
    }
}
