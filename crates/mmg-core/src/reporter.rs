/// Collects the non-fatal problems found while generating.
///
/// Reporting an error never interrupts generation; callers inspect
/// [`Reporter::errors`] once the run is over.
#[derive(Debug, Default)]
pub struct Reporter {
    messages: Vec<String>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.messages.push(message);
    }

    pub fn info(&self, message: &str) {
        log::info!("{message}");
    }

    /// Number of errors reported so far.
    pub fn errors(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
