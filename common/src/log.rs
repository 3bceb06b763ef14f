//! Fixed-size debug log.
//!
//! Lifecycle events (mount, reveal complete, dismiss, button taps) are
//! recorded as short lines in a ring buffer. The newest [`LOG_BUFFER_SIZE`]
//! lines are kept; older ones are dropped. Lines longer than
//! [`LOG_LINE_LENGTH`] are truncated rather than rejected.
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("mounted");
//! log.push_fmt(format_args!("reveal complete after {}ms", 4000));
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

/// One stored log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of debug lines, oldest first.
pub struct DebugLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Append a line, dropping the oldest one when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        Truncating(&mut line).write_str(msg).ok();
        self.push_line(line);
    }

    /// Append a formatted line, dropping the oldest one when full.
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = LogLine::new();
        Truncating(&mut line).write_fmt(args).ok();
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> {
        self.buffer.back().map(|line| line.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer that keeps whatever fits and silently drops the rest.
struct Truncating<'a>(&'a mut LogLine);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
