//! Destinations for trace lines.
//!
//! The admission filter formats one line per evaluated release and hands it
//! to a `TraceSink`. Sinks are shared between threads, so every
//! implementation must tolerate concurrent `emit` calls.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives one formatted trace line per decision.
pub trait TraceSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&self, line: &str) {
        // Holding the lock keeps lines from concurrent callers whole.
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            tracing::warn!("failed to write trace line to stdout: {}", e);
        }
    }
}

/// Forwards lines to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "release_filter::trace", "{}", line);
    }
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Remove and return the lines emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    // A panicking writer can't leave a half-pushed line, so a poisoned
    // buffer is still complete.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &str) {
        self.guard().push(line.to_string());
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&self, _line: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.emit("[+] year=2020 A");
        sink.emit("[-] C");

        assert_eq!(sink.lines(), vec!["[+] year=2020 A", "[-] C"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_memory_sink_concurrent_emits() {
        let sink = Arc::new(MemorySink::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for j in 0..25 {
                        sink.emit(&format!("[-] {i}-{j}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 100);
        assert!(lines.iter().all(|l| l.starts_with("[-] ")));
    }

    #[test]
    fn test_memory_sink_survives_poisoned_lock() {
        let sink = Arc::new(MemorySink::new());
        sink.emit("[+] year=2020 A");

        let poisoner = Arc::clone(&sink);
        let result = thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(sink.lines.is_poisoned());

        sink.emit("[-] C");
        assert_eq!(sink.lines(), vec!["[+] year=2020 A", "[-] C"]);
        assert_eq!(sink.take().len(), 2);
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_sink_emits_on_trace_target() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(true)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.emit("[+] tag=glitch B");
        });

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let line = output.lines().next().unwrap();
        assert!(line.contains("INFO"), "{line}");
        assert!(line.contains("release_filter::trace"), "{line}");
        assert!(line.ends_with("[+] tag=glitch B"), "{line}");
    }
}
