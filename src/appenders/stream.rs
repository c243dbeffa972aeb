//! Stream appender: console or any shared `Write` sink

use crate::core::{Appender, LogEntry, LogLevel, OutputFormat, Result, TimestampFormat};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// Clonable handle to a `Write` sink; every clone writes to the same sink.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}

/// Growable in-memory sink capturing raw backend output
///
/// ```
/// use rust_logger_facade::appenders::MemorySink;
/// use std::io::Write;
///
/// let sink = MemorySink::new();
/// let mut writer = sink.writer();
/// writeln!(writer, "first").unwrap();
/// writeln!(writer, "second").unwrap();
///
/// assert_eq!(sink.lines(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`SharedWriter`] appending to this sink
    pub fn writer(&self) -> SharedWriter {
        SharedWriter::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

enum StreamTarget {
    /// stdout, with error and fatal records routed to stderr
    Console,
    Writer(SharedWriter),
}

pub struct StreamAppender {
    target: StreamTarget,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    use_colors: bool,
}

impl StreamAppender {
    /// Appender writing to the process console
    pub fn console() -> Self {
        Self {
            target: StreamTarget::Console,
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
            use_colors: io::stdout().is_terminal(),
        }
    }

    /// Appender writing every record to `writer`
    pub fn writer(writer: SharedWriter) -> Self {
        Self {
            target: StreamTarget::Writer(writer),
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
        }
    }

    /// Set the output format for this appender
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this appender
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Force colored level tags on or off (text format only)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn render(&self, entry: &LogEntry) -> Result<String> {
        match self.output_format {
            OutputFormat::Text if self.use_colors => Ok(self.output_format.format_text(
                entry,
                &self.timestamp_format,
                &colored_tag(entry.level),
            )),
            _ => self.output_format.format(entry, &self.timestamp_format),
        }
    }
}

#[cfg(feature = "console")]
fn colored_tag(level: LogLevel) -> String {
    format!("{:5}", level.to_str())
        .color(level.color_code())
        .to_string()
}

#[cfg(not(feature = "console"))]
fn colored_tag(level: LogLevel) -> String {
    level.to_str().to_string()
}

impl Appender for StreamAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry)?;

        match &mut self.target {
            StreamTarget::Console => match entry.level {
                LogLevel::Error | LogLevel::Fatal => writeln!(io::stderr().lock(), "{}", output)?,
                _ => writeln!(io::stdout().lock(), "{}", output)?,
            },
            StreamTarget::Writer(writer) => writeln!(writer, "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            StreamTarget::Console => {
                io::stdout().flush()?;
                io::stderr().flush()?;
            }
            StreamTarget::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            StreamTarget::Console => "console",
            StreamTarget::Writer(_) => "writer",
        }
    }
}
