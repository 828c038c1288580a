//! Presentation-layer implementations of `ProgressReporter`.

use std::cell::RefCell;

use indicatif::ProgressBar;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Shows one spinner per step on stderr.
///
/// Only draws when the output context allows progress (TTY, not quiet);
/// otherwise every call is a no-op.
pub struct SpinnerReporter {
    enabled: bool,
    current: RefCell<Option<ProgressBar>>,
}

impl SpinnerReporter {
    #[must_use]
    pub fn new(ctx: &OutputContext) -> Self {
        Self {
            enabled: ctx.show_progress(),
            current: RefCell::new(None),
        }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let mut current = self.current.borrow_mut();
        if let Some(pb) = current.take() {
            pb.finish_and_clear();
        }
        *current = Some(progress::spinner(message));
    }

    fn finish(&self) {
        if let Some(pb) = self.current.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
