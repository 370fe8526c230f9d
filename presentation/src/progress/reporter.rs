//! Spinner shown while พี่สมเด็จ is "typing"

use indicatif::{ProgressBar, ProgressStyle};
use somdet_application::ReplyProgressNotifier;
use somdet_domain::PersonaTemplate;
use std::sync::Mutex;
use std::time::Duration;

/// Reports an outstanding reply with an indicatif spinner on stderr
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyProgressNotifier for SpinnerProgress {
    fn on_request_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(PersonaTemplate::THINKING);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_reply_settled(&self, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}
