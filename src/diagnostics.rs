/// Side-channel for the human-readable line emitted when detection comes up
/// empty.
///
/// The sink is injected into the pipeline entrypoint rather than held as a
/// process-wide stream, so concurrent checks never contend on shared state.
/// Callers that need the outcome programmatically must use the returned
/// boolean, not the diagnostic text.
pub trait DiagnosticSink {
    fn emit(&mut self, message: &str);
}

/// Prints each diagnostic line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects diagnostic lines in memory, for tests.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub messages: Vec<String>,
}

impl DiagnosticSink for BufferSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
