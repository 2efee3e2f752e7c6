/// Terminal rendition of the PPP page
use ppp_forms::{FormId, FormSurface};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A page drawn on a terminal: output elements become labelled blocks on
/// the writer and the visible section is tracked for the shell prompt.
pub struct TerminalSurface<W> {
    out: Mutex<W>,
    visible: Mutex<Option<FormId>>,
    intercepted: Mutex<BTreeSet<FormId>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            visible: Mutex::new(None),
            intercepted: Mutex::new(BTreeSet::new()),
        }
    }

    /// The section currently shown, if any.
    pub fn visible(&self) -> Option<FormId> {
        *lock(&self.visible)
    }

    pub fn is_intercepted(&self, form: FormId) -> bool {
        lock(&self.intercepted).contains(&form)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> FormSurface for TerminalSurface<W> {
    fn intercept(&self, form: FormId) {
        lock(&self.intercepted).insert(form);
    }

    fn set_visible(&self, form: FormId, visible: bool) {
        let mut current = lock(&self.visible);
        if visible {
            *current = Some(form);
        } else if *current == Some(form) {
            *current = None;
        }
    }

    fn render(&self, output_id: &str, text: &str) {
        let mut out = lock(&self.out);
        let written = writeln!(out, "[{}]", output_id)
            .and_then(|()| writeln!(out, "{}", text))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            tracing::warn!(output = %output_id, error = %e, "Failed to write output");
        }
    }
}
