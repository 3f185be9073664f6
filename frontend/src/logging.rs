use std::io;
use tracing_subscriber::EnvFilter;
use crate::config::CONFIG;

/// Buffers one formatted event and hands it to the browser console on drop.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(CONFIG.log_filter))
        .with_writer(ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("logging already initialised: {e}").into());
    }
}
