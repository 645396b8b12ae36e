//! Application state and core logic

use crate::config::WaitlistConfig;
use crate::controller::SubmissionController;
use crate::state::{AppState, FormFocus, RevealState, SubmissionStatus, SubmitAttempt};
use crate::submitter::Submitter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// UI state (variant, focus, animations)
    pub state: AppState,
    /// The waitlist form and its submission
    pub controller: SubmissionController,
    /// Loaded configuration, updated when the variant changes
    config: WaitlistConfig,
    /// Where the variant preference is saved
    config_path: Option<PathBuf>,
    /// When the current submission started, for the spinner
    pub submit_started: Option<Instant>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: WaitlistConfig, submitter: Arc<dyn Submitter>) -> Self {
        let state = AppState::new(config.variant(), config.brand());

        Self {
            state,
            controller: SubmissionController::new(submitter),
            config,
            config_path: WaitlistConfig::config_path(),
            submit_started: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request shutdown, cancelling any in-flight submission
    pub fn quit(&mut self) {
        self.controller.cancel();
        self.quit = true;
    }

    /// Whether the event loop should poll at animation speed
    pub fn needs_fast_tick(&self) -> bool {
        self.state.is_animating() || self.controller.is_in_flight()
    }

    /// Advance animations and pick up finished submissions
    pub async fn tick(&mut self) {
        self.state.update_reveals();

        if self.controller.poll_completion().await {
            self.on_submission_settled();
        }
    }

    fn on_submission_settled(&mut self) {
        self.submit_started = None;
        match self.controller.status() {
            SubmissionStatus::Submitted => {
                self.state.success_reveal = Some(RevealState::new());
            }
            SubmissionStatus::Idle => {
                self.state.focus = FormFocus::Input;
            }
            SubmissionStatus::Submitting => {}
        }
    }

    /// Handle keyboard events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key finishes the page entry animation
        if let Some(ref mut reveal) = self.state.page_reveal {
            reveal.skip();
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::F(2) => self.cycle_variant(),
            KeyCode::Tab | KeyCode::BackTab => {
                if self.controller.status() != SubmissionStatus::Submitted {
                    self.state.focus.toggle();
                }
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace if self.state.focus == FormFocus::Input => {
                self.controller.pop_char();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.clear_input();
            }
            KeyCode::Char(c)
                if self.state.focus == FormFocus::Input
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.controller.push_char(c);
            }
            _ => {}
        }

        Ok(())
    }

    /// Submit the form from the keyboard
    fn submit(&mut self) {
        match self.controller.submit_input() {
            SubmitAttempt::Started(_) => {
                self.submit_started = Some(Instant::now());
            }
            SubmitAttempt::Invalid(_) => {
                self.state.focus = FormFocus::Input;
            }
            SubmitAttempt::Ignored => {}
        }
    }

    /// Switch to the other variant and remember the choice
    fn cycle_variant(&mut self) {
        self.state.variant = self.state.variant.next();
        self.config.variant = Some(self.state.variant);
        tracing::info!("Switched to {} variant", self.state.variant.label());

        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("Failed to save variant preference: {err:#}");
        }
    }

    /// Spinner frame index for the submit button
    pub fn spinner_frame(&self, frame_count: usize) -> usize {
        const FRAME_MS: u128 = 80;
        self.submit_started
            .map(|start| (start.elapsed().as_millis() / FRAME_MS) as usize % frame_count.max(1))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Variant;
    use crate::submitter::{MockSubmitter, SubmitError, SUBMIT_FAILED_MESSAGE};
    use crate::validation::INVALID_EMAIL_MESSAGE;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(result: Result<(), SubmitError>, times: usize) -> App {
        let mut mock = MockSubmitter::new();
        mock.expect_submit()
            .times(times)
            .returning(move |_| result.clone());
        App::new(WaitlistConfig::default(), Arc::new(mock))
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod typing {
        use super::*;

        #[tokio::test]
        async fn test_chars_edit_the_email() {
            let mut app = app_with(Ok(()), 0);
            type_text(&mut app, "abc").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.controller.snapshot().email, "ab");
        }

        #[tokio::test]
        async fn test_ctrl_u_clears() {
            let mut app = app_with(Ok(()), 0);
            type_text(&mut app, "abc").await;
            app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert_eq!(app.controller.snapshot().email, "");
        }

        #[tokio::test]
        async fn test_chars_ignored_when_button_focused() {
            let mut app = app_with(Ok(()), 0);
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, FormFocus::Button);

            type_text(&mut app, "abc").await;
            assert_eq!(app.controller.snapshot().email, "");
        }

        #[tokio::test]
        async fn test_first_key_skips_page_reveal() {
            let mut app = app_with(Ok(()), 0);
            assert!(app.state.page_reveal.is_some());
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            app.tick().await;
            assert!(app.state.page_reveal.is_none());
        }
    }

    mod submitting {
        use super::*;

        #[tokio::test]
        async fn test_enter_with_invalid_email_shows_error() {
            let mut app = app_with(Ok(()), 0);
            type_text(&mut app, "not-an-email").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let snapshot = app.controller.snapshot();
            assert_eq!(snapshot.status, SubmissionStatus::Idle);
            assert_eq!(snapshot.error_message.as_deref(), Some(INVALID_EMAIL_MESSAGE));
            assert_eq!(app.state.focus, FormFocus::Input);
            assert!(app.submit_started.is_none());
        }

        #[tokio::test]
        async fn test_enter_with_valid_email_submits() {
            let mut app = app_with(Ok(()), 1);
            type_text(&mut app, "user@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.controller.status(), SubmissionStatus::Submitting);
            assert!(app.submit_started.is_some());
            assert!(app.needs_fast_tick());

            app.controller.wait_for_completion().await;
            app.on_submission_settled();

            assert_eq!(app.controller.status(), SubmissionStatus::Submitted);
            assert!(app.state.success_reveal.is_some());
            assert!(app.submit_started.is_none());
        }

        #[tokio::test]
        async fn test_repeated_enter_submits_once() {
            let mut app = app_with(Ok(()), 1);
            type_text(&mut app, "user@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            app.controller.wait_for_completion().await;
            assert_eq!(app.controller.status(), SubmissionStatus::Submitted);
        }

        #[tokio::test]
        async fn test_failed_submission_refocuses_input() {
            let mut app = app_with(Err(SubmitError::Transport("offline".to_string())), 1);
            type_text(&mut app, "user@example.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            app.controller.wait_for_completion().await;
            app.on_submission_settled();

            let snapshot = app.controller.snapshot();
            assert_eq!(snapshot.status, SubmissionStatus::Idle);
            assert_eq!(snapshot.error_message.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
            assert_eq!(app.state.focus, FormFocus::Input);
        }
    }

    mod lifecycle {
        use super::*;

        #[tokio::test]
        async fn test_esc_quits_and_cancels() {
            // The task is aborted before it gets a chance to run, or right after
            let mut mock = MockSubmitter::new();
            mock.expect_submit().times(0..=1).returning(|_| Ok(()));
            let mut app = App::new(WaitlistConfig::default(), Arc::new(mock));
            type_text(&mut app, "user@example.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            assert!(app.should_quit());
            assert!(!app.controller.is_in_flight());
        }

        #[tokio::test]
        async fn test_tab_ignored_after_submission() {
            let mut app = app_with(Ok(()), 1);
            type_text(&mut app, "a@b.com").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.controller.wait_for_completion().await;

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.focus, FormFocus::Input);
        }

        #[test]
        fn test_new_uses_config() {
            let config = WaitlistConfig {
                variant: Some(Variant::Spotlight),
                brand: Some("Orbit".to_string()),
                ..Default::default()
            };
            let app = App::new(config, Arc::new(MockSubmitter::new()));
            assert_eq!(app.state.variant, Variant::Spotlight);
            assert_eq!(app.state.brand, "Orbit");
        }

        #[tokio::test]
        async fn test_f2_cycles_variant_and_saves_it() {
            let path = std::env::temp_dir()
                .join(format!("waitlist-tui-{}-f2", std::process::id()))
                .join("config.json");
            let mut app = app_with(Ok(()), 0);
            app.config_path = Some(path.clone());

            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.variant, Variant::Spotlight);
            let saved = WaitlistConfig::load_from(&path).unwrap();
            assert_eq!(saved.variant, Some(Variant::Spotlight));

            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.variant, Variant::Minimal);
            let saved = WaitlistConfig::load_from(&path).unwrap();
            let _ = std::fs::remove_dir_all(path.parent().unwrap());
            assert_eq!(saved.variant, Some(Variant::Minimal));
        }

        #[tokio::test]
        async fn test_f2_without_config_path_still_cycles() {
            let mut app = app_with(Ok(()), 0);
            app.config_path = None;

            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.variant, Variant::Spotlight);
        }

        #[test]
        fn test_spinner_frame_without_submission() {
            let app = App::new(WaitlistConfig::default(), Arc::new(MockSubmitter::new()));
            assert_eq!(app.spinner_frame(8), 0);
            assert_eq!(app.spinner_frame(0), 0);
        }
    }
}
