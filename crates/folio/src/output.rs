//! Terminal messages on stderr.
//!
//! stdout is reserved for rendered documents, so everything meant for the
//! operator goes through [`Output`].

use console::{Style, Term};

/// Message severity, which picks the color.
#[derive(Clone, Copy, Debug)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red().bold(),
        }
    }
}

/// Colored line writer for stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Error, msg);
    }

    fn line(&self, tone: Tone, msg: &str) {
        // A closed stderr leaves nowhere to report the failure.
        let _ = self
            .term
            .write_line(&tone.style().apply_to(msg).to_string());
    }
}
