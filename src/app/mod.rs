// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form and the toasts.
//!
//! The `App` struct wires together the feedback form, localization and the
//! notification manager, and translates form events into notices. It also
//! owns the startup policy (config loading, theme selection, window size).

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::FeedbackSubmitter;
use crate::config::{self, Config};
use crate::domain::feedback::{FormLimits, SubmissionOutcome};
use crate::i18n::fluent::I18n;
use crate::infrastructure::SimulatedBackend;
use crate::ui::feedback_form::{self, Event as FormEvent};
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Root Iced application state: one feedback form plus the toast overlay.
pub struct App {
    pub i18n: I18n,
    form: feedback_form::State,
    theme_mode: ThemeMode,
    /// How long submission outcome notices stay on screen.
    notice_duration: Duration,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the form around the simulated
    /// backend. Config problems are reported as a startup warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let submitter = Arc::new(SimulatedBackend::from_config(&config.submission));
        let mut app = Self::with_config(&config, submitter);

        if let Some(theme) = flags.theme {
            app.theme_mode = theme;
        }

        tracing::info!(
            theme = %app.theme_mode,
            delay_ms = config.submission.delay().as_millis() as u64,
            success_rate = config.submission.success_rate(),
            "Feedback form ready"
        );

        let task = match config_warning {
            Some(key) => app
                .notifications
                .push(Notification::warning(key))
                .map(Message::Notification),
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(config: &Config, submitter: Arc<dyn FeedbackSubmitter>) -> Self {
        Self {
            i18n: I18n::default(),
            form: feedback_form::State::new(FormLimits::from(&config.form), submitter),
            theme_mode: config.general.theme_mode,
            notice_duration: config.notifications.display_duration(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.form.accepts_file_drop())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(form_message) => self.handle_form_message(form_message),
            Message::FileDropped(path) => {
                self.handle_form_message(feedback_form::Message::FileDropped(path))
            }
            Message::Notification(notification_message) => self
                .notifications
                .handle_message(notification_message)
                .map(Message::Notification),
        }
    }

    fn handle_form_message(&mut self, message: feedback_form::Message) -> Task<Message> {
        let (event, task) = self.form.handle_message(message, &self.i18n);
        let task = task.map(Message::Form);

        let notice = match event {
            FormEvent::None => return task,
            FormEvent::Submitted(outcome) => self.outcome_notice(&outcome),
            FormEvent::AttachmentUnreadable { file_name } => {
                Notification::warning("notification-attachment-unreadable")
                    .with_arg("file", file_name)
            }
        };

        let notice_task = self.notifications.push(notice).map(Message::Notification);
        Task::batch([task, notice_task])
    }

    /// Outcome notices auto-clear after the configured window, failures included.
    fn outcome_notice(&self, outcome: &SubmissionOutcome) -> Notification {
        let severity = if outcome.is_success() {
            Severity::Success
        } else {
            Severity::Error
        };
        Notification::plain(severity, outcome.message()).auto_dismiss(self.notice_duration)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::Field;
    use crate::test_utils::FixedSubmitter;
    use crate::ui::notifications::{NotificationMessage, NotificationText};

    fn app_with(submitter: Arc<FixedSubmitter>) -> App {
        App::with_config(&Config::default(), submitter)
    }

    fn fill_valid_form(app: &mut App) {
        let _ = app.update(Message::Form(feedback_form::Message::NameChanged(
            "Ana".into(),
        )));
        let _ = app.update(Message::Form(feedback_form::Message::EmailChanged(
            "a@b.co".into(),
        )));
        let _ = app.update(Message::Form(feedback_form::Message::StarSelected(4)));
    }

    fn visible_texts(app: &App) -> Vec<NotificationText> {
        app.notifications
            .visible()
            .map(|notification| notification.text().clone())
            .collect()
    }

    #[test]
    fn defaults_follow_configuration() {
        let app = app_with(Arc::new(FixedSubmitter::succeeding()));
        assert_eq!(app.theme_mode, ThemeMode::System);
        assert_eq!(app.notice_duration, Duration::from_secs(3));
        assert_eq!(app.form.limits(), &FormLimits::default());
        assert_eq!(app.title(), "Feedback & Rating");
    }

    #[test]
    fn successful_submission_shows_thank_you_and_success_notice() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut app = app_with(submitter.clone());
        fill_valid_form(&mut app);

        let _ = app.update(Message::Form(feedback_form::Message::Submit));
        assert_eq!(submitter.calls(), 1);

        let _ = app.update(Message::Form(
            feedback_form::Message::SubmissionCompleted(SubmissionOutcome::success(
                "Feedback submitted!",
            )),
        ));

        assert!(app.form.is_submitted());
        assert_eq!(
            app.i18n
                .tr_with_args("form-thank-you", &[("name", app.form.record().name())]),
            "🎉 Thank you for your feedback, Ana!"
        );
        assert_eq!(
            visible_texts(&app),
            vec![NotificationText::Plain("Feedback submitted!".into())]
        );
        let notice = app.notifications.visible().next().expect("notice");
        assert_eq!(notice.severity(), Severity::Success);
        assert_eq!(notice.display_duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn failed_submission_keeps_form_and_notice_expires() {
        let mut app = app_with(Arc::new(FixedSubmitter::failing()));
        fill_valid_form(&mut app);

        let _ = app.update(Message::Form(feedback_form::Message::Submit));
        let _ = app.update(Message::Form(
            feedback_form::Message::SubmissionCompleted(SubmissionOutcome::failure(
                "Failed to submit feedback!",
            )),
        ));

        assert!(!app.form.is_submitted());
        assert_eq!(app.form.record().name(), "Ana");
        assert_eq!(app.form.record().email(), "a@b.co");
        assert_eq!(app.form.record().rating().value(), 4);

        let notice = app.notifications.visible().next().expect("notice").clone();
        assert_eq!(notice.severity(), Severity::Error);
        assert_eq!(notice.display_duration(), Some(Duration::from_secs(3)));
        assert_eq!(app.notifications.pending_timers(), 1);

        let _ = app.update(Message::Notification(NotificationMessage::Expired(
            notice.id(),
        )));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn invalid_submission_shows_inline_errors_only() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut app = app_with(submitter.clone());

        let _ = app.update(Message::Form(feedback_form::Message::EmailChanged(
            "bad".into(),
        )));
        let _ = app.update(Message::Form(feedback_form::Message::Submit));

        assert!(app.form.errors().contains(Field::Name));
        assert!(app.form.errors().contains(Field::Rating));
        assert_eq!(submitter.calls(), 0);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn reset_keeps_visible_notice() {
        let mut app = app_with(Arc::new(FixedSubmitter::succeeding()));
        fill_valid_form(&mut app);
        let _ = app.update(Message::Form(feedback_form::Message::Submit));
        let _ = app.update(Message::Form(
            feedback_form::Message::SubmissionCompleted(SubmissionOutcome::success("ok")),
        ));

        let _ = app.update(Message::Form(feedback_form::Message::Reset));

        assert!(!app.form.is_submitted());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn unreadable_dropped_file_raises_warning() {
        let mut app = app_with(Arc::new(FixedSubmitter::succeeding()));

        let generation = app.form.attachment_generation();
        let _ = app.update(Message::Form(
            feedback_form::Message::AttachmentInspected {
                generation,
                file_name: "gone.pdf".into(),
                result: Err(crate::error::Error::Io("missing".into())),
            },
        ));

        let notice = app.notifications.visible().next().expect("notice");
        assert_eq!(notice.severity(), Severity::Warning);
        assert_eq!(
            notice.text(),
            &NotificationText::Key {
                key: "notification-attachment-unreadable".into(),
                args: vec![("file".into(), "gone.pdf".into())],
            }
        );
    }

    #[test]
    fn file_drop_after_submission_is_ignored() {
        let mut app = app_with(Arc::new(FixedSubmitter::succeeding()));
        fill_valid_form(&mut app);
        let _ = app.update(Message::Form(feedback_form::Message::Submit));
        let _ = app.update(Message::Form(
            feedback_form::Message::SubmissionCompleted(SubmissionOutcome::success("ok")),
        ));

        let _ = app.update(Message::FileDropped("/tmp/late.png".into()));

        assert!(app.form.record().file().is_none());
    }

    #[test]
    fn notice_duration_comes_from_config() {
        let mut config = Config::default();
        config.notifications.display_secs = Some(7);
        let mut app = App::with_config(&config, Arc::new(FixedSubmitter::failing()));
        fill_valid_form(&mut app);
        let _ = app.update(Message::Form(feedback_form::Message::Submit));
        let _ = app.update(Message::Form(
            feedback_form::Message::SubmissionCompleted(SubmissionOutcome::failure("no")),
        ));

        let notice = app.notifications.visible().next().expect("notice");
        assert_eq!(notice.display_duration(), Some(Duration::from_secs(7)));
    }
}
