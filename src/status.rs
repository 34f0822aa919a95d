//! @acp:module "Status Ticker"
//! @acp:summary "Cancellable rotating status message shown while a plan is generated"
//! @acp:domain cli
//! @acp:layer output
//!
//! The ticker is a repeating task on the tokio runtime. It has no link to the request it
//! decorates: the owner stops it when the request settles, and dropping the ticker
//! aborts the task so it never outlives its session.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;

/// Spinner frame rate, independent of the message interval
const SPINNER_TICK: Duration = Duration::from_millis(120);

/// @acp:summary "Rotates messages on a spinner until stopped or dropped"
pub struct StatusTicker {
    bar: ProgressBar,
    task: Option<JoinHandle<()>>,
}

impl StatusTicker {
    /// Visible spinner on stderr
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(messages: &'static [&'static str], interval: Duration) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(SPINNER_TICK);
        Self::with_bar(bar, messages, interval)
    }

    /// Ticker drawing nothing, for non-interactive output
    pub fn hidden(messages: &'static [&'static str], interval: Duration) -> Self {
        Self::with_bar(ProgressBar::hidden(), messages, interval)
    }

    /// Rotate `messages` on the given bar every `interval`
    pub fn with_bar(bar: ProgressBar, messages: &'static [&'static str], interval: Duration) -> Self {
        if let Some(first) = messages.first() {
            bar.set_message(*first);
        }

        let task = (messages.len() > 1).then(|| {
            let bar = bar.clone();
            tokio::spawn(async move {
                let mut ticks = tokio::time::interval(interval);
                // The first tick completes immediately
                ticks.tick().await;
                let mut current = 0;
                loop {
                    ticks.tick().await;
                    current = (current + 1) % messages.len();
                    bar.set_message(messages[current]);
                }
            })
        });

        Self { bar, task }
    }

    /// Message currently displayed
    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// @acp:summary "Cancel the rotation and clear the spinner"
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
        self.bar.finish_and_clear();
    }
}

impl Drop for StatusTicker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
