//! Routes `tracing` output to the browser console.
//!
//! Each formatted event is buffered by a [`ConsoleWriter`] and flushed as a
//! single console call matching the event level, so `error` events show up
//! as console errors in the webview devtools. Outside of wasm the same lines
//! go to stderr.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::{Result, WebError};

pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buffer);
        let text = String::from_utf8_lossy(&bytes);
        let line = text.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            None
        } else {
            Some(line.to_owned())
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let message = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&message),
        Level::WARN => web_sys::console::warn_1(&message),
        Level::INFO => web_sys::console::log_1(&message),
        _ => web_sys::console::debug_1(&message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write;

    let _ = writeln!(io::stderr(), "{line}");
}

#[derive(Clone, Copy, Debug, Default)]
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

/// Installs a global `fmt` subscriber writing to the console.
///
/// Timestamps are disabled since `std::time::SystemTime` is not available on
/// `wasm32-unknown-unknown`.
pub fn init_console_logging(max_level: Level) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| WebError::LoggingInitialized(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn writer_buffers_until_flushed() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "WARN neo: ").unwrap();
        writeln!(writer, "api rejected").unwrap();

        assert_eq!(writer.take_line().as_deref(), Some("WARN neo: api rejected"));
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn blank_lines_are_not_emitted() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writeln!(writer).unwrap();

        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn only_the_first_global_subscriber_is_accepted() {
        assert!(init_console_logging(Level::DEBUG).is_ok());
        assert!(matches!(
            init_console_logging(Level::DEBUG),
            Err(WebError::LoggingInitialized(_))
        ));
    }
}
