use ufmt::{uWrite, uwrite};

/// Write-only debug console over any [`uWrite`] sink.
///
/// Plain serial terminals want CRLF line endings. Console output is best
/// effort; a sink error drops the message.
pub struct Console<W> {
    sink: W,
}

impl<W: uWrite> Console<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_line(&mut self, s: &str) {
        uwrite!(self.sink, "{}\r\n", s).ok();
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) {
        uwrite!(self.sink, "[DBG] {}: {}\r\n", msg, val).ok();
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
