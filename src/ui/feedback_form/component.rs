// SPDX-License-Identifier: MPL-2.0
//! Feedback form component encapsulating state and update logic.

use crate::application::port::FeedbackSubmitter;
use crate::domain::feedback::{
    validate, Attachment, FieldUpdate, FormLimits, FormRecord, SubmissionOutcome,
    ValidationErrors,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::attachment;
use iced::widget::text_editor::{self, Edit, Motion};
use iced::Task;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    StarSelected(u8),
    /// Open the native file picker.
    PickFile,
    /// Result of the file picker; `None` when the dialog was cancelled.
    FilePicked(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Size lookup result, tagged with the attachment generation it was
    /// started in. Results from an older generation are dropped.
    AttachmentInspected {
        generation: u64,
        file_name: String,
        result: Result<Attachment, Error>,
    },
    ClearFile,
    Submit,
    SubmissionCompleted(SubmissionOutcome),
    /// "Submit Another Feedback" on the thank-you screen.
    Reset,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The backend answered; the parent shows the outcome as a notice.
    Submitted(SubmissionOutcome),
    /// The chosen file could not be read and was dropped from the form.
    AttachmentUnreadable { file_name: String },
}

/// Complete feedback form state.
pub struct State {
    record: FormRecord,
    errors: ValidationErrors,
    submitted: bool,
    submitting: bool,
    /// Editor buffer mirroring `record.message()`.
    message_editor: text_editor::Content,
    limits: FormLimits,
    submitter: Arc<dyn FeedbackSubmitter>,
    /// Bumped whenever the attachment is picked, cleared or reset.
    attachment_generation: u64,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("record", &self.record)
            .field("errors", &self.errors)
            .field("submitted", &self.submitted)
            .field("submitting", &self.submitting)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an empty form that submits through `submitter`.
    pub fn new(limits: FormLimits, submitter: Arc<dyn FeedbackSubmitter>) -> Self {
        Self {
            record: FormRecord::new(),
            errors: ValidationErrors::default(),
            submitted: false,
            submitting: false,
            message_editor: text_editor::Content::new(),
            limits,
            submitter,
            attachment_generation: 0,
        }
    }

    #[must_use]
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Errors from the last submit attempt.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn limits(&self) -> &FormLimits {
        &self.limits
    }

    /// Generation tag carried by the next attachment inspection result.
    #[must_use]
    pub fn attachment_generation(&self) -> u64 {
        self.attachment_generation
    }

    pub(super) fn message_editor(&self) -> &text_editor::Content {
        &self.message_editor
    }

    /// Whether the submit button and the Enter shortcut are enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.record.rating().is_unset()
    }

    /// Catalog key of the submit button label.
    #[must_use]
    pub fn submit_label_key(&self) -> &'static str {
        if self.submitting {
            "form-submitting"
        } else {
            "form-submit"
        }
    }

    /// Character counter shown under the message, e.g. `"12/500"`.
    #[must_use]
    pub fn message_counter(&self, i18n: &I18n) -> String {
        i18n.tr_with_args(
            "form-message-counter",
            &[
                ("count", &self.record.message_len().to_string()),
                ("max", &self.limits.message_max_chars.to_string()),
            ],
        )
    }

    /// Dropped files are taken only while the form itself is on screen.
    #[must_use]
    pub fn accepts_file_drop(&self) -> bool {
        !self.submitted && !self.submitting
    }

    /// Handles a form message and returns the event for the parent along with
    /// any follow-up work.
    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(name) => {
                self.record.update(FieldUpdate::Name(name), &self.limits);
                (Event::None, Task::none())
            }
            Message::EmailChanged(email) => {
                self.record.update(FieldUpdate::Email(email), &self.limits);
                (Event::None, Task::none())
            }
            Message::MessageEdited(action) => {
                self.edit_message(action);
                (Event::None, Task::none())
            }
            Message::StarSelected(stars) => {
                self.record.set_rating(stars);
                (Event::None, Task::none())
            }
            Message::PickFile => {
                let title = i18n.tr("form-file-dialog-title");
                (
                    Event::None,
                    Task::perform(attachment::pick_file(title), Message::FilePicked),
                )
            }
            Message::FilePicked(Some(path)) => (Event::None, self.inspect_attachment(path)),
            Message::FilePicked(None) | Message::ClearFile => {
                self.attachment_generation += 1;
                self.record.update(FieldUpdate::File(None), &self.limits);
                (Event::None, Task::none())
            }
            Message::FileDropped(path) => {
                if self.accepts_file_drop() {
                    (Event::None, self.inspect_attachment(path))
                } else {
                    tracing::debug!(path = %path.display(), "Ignoring dropped file");
                    (Event::None, Task::none())
                }
            }
            Message::AttachmentInspected { generation, .. }
                if generation != self.attachment_generation || self.submitted =>
            {
                tracing::debug!(generation, "Dropping stale attachment inspection");
                (Event::None, Task::none())
            }
            Message::AttachmentInspected {
                file_name, result, ..
            } => match result {
                Ok(attachment) => {
                    self.record
                        .update(FieldUpdate::File(Some(attachment)), &self.limits);
                    (Event::None, Task::none())
                }
                Err(error) => {
                    tracing::warn!(file = %file_name, %error, "Attachment could not be read");
                    self.record.update(FieldUpdate::File(None), &self.limits);
                    (Event::AttachmentUnreadable { file_name }, Task::none())
                }
            },
            Message::Submit => (Event::None, self.submit()),
            Message::SubmissionCompleted(outcome) => {
                self.submitting = false;
                if outcome.is_success() {
                    self.submitted = true;
                }
                (Event::Submitted(outcome), Task::none())
            }
            Message::Reset => {
                self.reset();
                (Event::None, Task::none())
            }
        }
    }

    /// Validates the record and, when it passes, hands it to the backend.
    fn submit(&mut self) -> Task<Message> {
        if self.submitting {
            tracing::debug!("Submit ignored while a submission is in flight");
            return Task::none();
        }

        self.errors = validate(&self.record, &self.limits);
        if !self.errors.is_empty() {
            tracing::debug!(failing = self.errors.len(), "Feedback failed validation");
            return Task::none();
        }

        self.submitting = true;
        tracing::info!(stars = self.record.rating().value(), "Submitting feedback");
        Task::perform(
            self.submitter.submit(self.record.clone()),
            Message::SubmissionCompleted,
        )
    }

    /// Returns the form to its initial, empty state.
    fn reset(&mut self) {
        self.record = FormRecord::new();
        self.errors = ValidationErrors::default();
        self.submitted = false;
        self.message_editor = text_editor::Content::new();
        self.attachment_generation += 1;
    }

    /// Applies an editor action and mirrors the text into the record.
    ///
    /// Edits that would exceed the message limit are refused. Pasted text is
    /// clipped to the room left, so existing text is never cut.
    fn edit_message(&mut self, action: text_editor::Action) {
        let text_editor::Action::Edit(edit) = action else {
            self.message_editor.perform(action);
            return;
        };

        let max = self.limits.message_max_chars;
        let selected = self
            .message_editor
            .selection()
            .map_or(0, |selection| char_count(&selection));
        let room = max.saturating_sub(self.record.message_len().saturating_sub(selected));

        let edit = match edit {
            Edit::Insert(_) | Edit::Enter if room == 0 => return,
            Edit::Paste(pasted) if char_count(&pasted) > room => {
                Edit::Paste(Arc::new(pasted.chars().take(room).collect()))
            }
            other => other,
        };

        self.message_editor.perform(text_editor::Action::Edit(edit));
        let text = editor_text(&self.message_editor);

        if text.chars().count() > max {
            // Indentation grows by an amount only known after the fact.
            self.message_editor = text_editor::Content::with_text(self.record.message());
            self.message_editor
                .perform(text_editor::Action::Move(Motion::DocumentEnd));
            return;
        }

        self.record.update(FieldUpdate::Message(text), &self.limits);
    }

    /// Reads the file size off the UI thread. Starting a new inspection
    /// supersedes any still in flight.
    fn inspect_attachment(&mut self, path: PathBuf) -> Task<Message> {
        self.attachment_generation += 1;
        let generation = self.attachment_generation;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Task::perform(attachment::inspect(path), move |result| {
            Message::AttachmentInspected {
                generation,
                file_name: file_name.clone(),
                result,
            }
        })
    }
}

/// Editor text with lines joined by `\n`, whatever the platform line ending.
fn editor_text(content: &text_editor::Content) -> String {
    content
        .lines()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Character count as the record sees it; `\r` of CRLF endings is ignored.
fn char_count(text: &str) -> usize {
    text.chars().filter(|c| *c != '\r').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::Field;
    use crate::test_utils::FixedSubmitter;
    use iced::widget::text_editor::{Action, Edit};

    fn form_with(submitter: Arc<FixedSubmitter>) -> State {
        State::new(FormLimits::default(), submitter)
    }

    fn send(state: &mut State, message: Message) -> Event {
        let i18n = I18n::default();
        let (event, _task) = state.handle_message(message, &i18n);
        event
    }

    /// Inspection result for the attachment generation currently expected.
    fn inspected(state: &State, file_name: &str, result: Result<Attachment, Error>) -> Message {
        Message::AttachmentInspected {
            generation: state.attachment_generation(),
            file_name: file_name.into(),
            result,
        }
    }

    fn paste(state: &mut State, text: &str) {
        send(
            state,
            Message::MessageEdited(Action::Edit(Edit::Paste(Arc::new(text.into())))),
        );
    }

    fn fill_valid(state: &mut State) {
        send(state, Message::NameChanged("Ana".into()));
        send(state, Message::EmailChanged("a@b.co".into()));
        send(state, Message::StarSelected(4));
        send(
            state,
            Message::MessageEdited(Action::Edit(Edit::Paste(Arc::new("Great".into())))),
        );
    }

    #[test]
    fn new_form_is_empty_and_cannot_submit() {
        let state = form_with(Arc::new(FixedSubmitter::succeeding()));
        assert_eq!(state.record(), &FormRecord::new());
        assert!(state.errors().is_empty());
        assert!(!state.is_submitted());
        assert!(!state.can_submit());
    }

    #[test]
    fn field_updates_do_not_validate() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        send(&mut state, Message::EmailChanged("bad".into()));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn valid_submit_calls_backend_and_marks_submitting() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut state = form_with(submitter.clone());
        fill_valid(&mut state);

        send(&mut state, Message::Submit);

        assert!(state.errors().is_empty());
        assert!(state.is_submitting());
        assert!(!state.can_submit());
        assert_eq!(state.submit_label_key(), "form-submitting");
        assert_eq!(submitter.calls(), 1);
        let sent = submitter.last_record().expect("record sent");
        assert_eq!(sent.name(), "Ana");
        assert_eq!(sent.message(), "Great");
    }

    #[test]
    fn invalid_submit_stores_errors_without_calling_backend() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut state = form_with(submitter.clone());
        send(&mut state, Message::EmailChanged("bad".into()));

        send(&mut state, Message::Submit);

        assert_eq!(state.errors().len(), 3);
        assert_eq!(
            state.errors().message(Field::Email).as_deref(),
            Some("Invalid email")
        );
        assert!(!state.is_submitting());
        assert_eq!(submitter.calls(), 0);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut state = form_with(submitter.clone());
        fill_valid(&mut state);

        send(&mut state, Message::Submit);
        send(&mut state, Message::Submit);

        assert_eq!(submitter.calls(), 1);
    }

    #[test]
    fn success_marks_form_submitted_and_reports_outcome() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        fill_valid(&mut state);
        send(&mut state, Message::Submit);

        let outcome = SubmissionOutcome::success("Feedback submitted!");
        let event = send(&mut state, Message::SubmissionCompleted(outcome.clone()));

        assert_eq!(event, Event::Submitted(outcome));
        assert!(state.is_submitted());
        assert!(!state.is_submitting());
        assert!(!state.accepts_file_drop());
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut state = form_with(Arc::new(FixedSubmitter::failing()));
        fill_valid(&mut state);
        send(&mut state, Message::Submit);

        let outcome = SubmissionOutcome::failure("Failed to submit feedback!");
        let event = send(&mut state, Message::SubmissionCompleted(outcome.clone()));

        assert_eq!(event, Event::Submitted(outcome));
        assert!(!state.is_submitted());
        assert_eq!(state.record().name(), "Ana");
        assert_eq!(state.record().rating().value(), 4);
        assert!(state.can_submit());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        fill_valid(&mut state);
        send(&mut state, Message::Submit);
        send(
            &mut state,
            Message::SubmissionCompleted(SubmissionOutcome::success("ok")),
        );

        send(&mut state, Message::Reset);

        assert_eq!(state.record(), &FormRecord::new());
        assert!(state.errors().is_empty());
        assert!(!state.is_submitted());
        assert_eq!(editor_text(state.message_editor()), "");
    }

    #[test]
    fn message_is_truncated_and_counter_reads_limit() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        let long = "x".repeat(600);

        send(
            &mut state,
            Message::MessageEdited(Action::Edit(Edit::Paste(Arc::new(long)))),
        );

        assert_eq!(state.record().message_len(), 500);
        assert_eq!(editor_text(state.message_editor()).chars().count(), 500);
        assert_eq!(state.message_counter(&I18n::default()), "500/500");
    }

    #[test]
    fn cursor_moves_do_not_touch_the_record() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        send(&mut state, Message::MessageEdited(Action::Move(Motion::Left)));
        assert_eq!(state.record().message(), "");
    }

    #[test]
    fn cancelled_picker_and_clear_remove_attachment() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        for clearing in [Message::FilePicked(None), Message::ClearFile] {
            let inspected = inspected(&state, "a.png", Ok(Attachment::new("/tmp/a.png", 10)));
            send(&mut state, inspected);
            assert!(state.record().file().is_some());

            send(&mut state, clearing);
            assert!(state.record().file().is_none());
        }
    }

    #[test]
    fn unreadable_attachment_is_reported_and_cleared() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        let inspected = inspected(&state, "gone.pdf", Err(Error::Io("No such file".into())));
        let event = send(&mut state, inspected);

        assert_eq!(
            event,
            Event::AttachmentUnreadable {
                file_name: "gone.pdf".into()
            }
        );
        assert!(state.record().file().is_none());
    }

    #[test]
    fn oversized_attachment_fails_validation() {
        let submitter = Arc::new(FixedSubmitter::succeeding());
        let mut state = form_with(submitter.clone());
        fill_valid(&mut state);
        let inspected = inspected(
            &state,
            "big.zip",
            Ok(Attachment::new("/tmp/big.zip", 3 * 1024 * 1024)),
        );
        send(&mut state, inspected);

        send(&mut state, Message::Submit);

        assert_eq!(
            state.errors().message(Field::File).as_deref(),
            Some("File size must be < 2MB")
        );
        assert_eq!(submitter.calls(), 0);
    }

    #[test]
    fn typing_into_a_full_message_is_refused() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        let full = format!("{}END", "x".repeat(497));
        paste(&mut state, &full);

        send(
            &mut state,
            Message::MessageEdited(Action::Move(Motion::DocumentStart)),
        );
        send(&mut state, Message::MessageEdited(Action::Edit(Edit::Insert('A'))));
        send(&mut state, Message::MessageEdited(Action::Edit(Edit::Enter)));

        assert_eq!(state.record().message(), full);
        assert_eq!(editor_text(state.message_editor()), full);
    }

    #[test]
    fn paste_is_clipped_to_remaining_room() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        paste(&mut state, &"x".repeat(498));

        paste(&mut state, "abcdef");

        assert_eq!(state.record().message_len(), 500);
        assert!(state.record().message().ends_with("xab"));
        assert_eq!(editor_text(state.message_editor()), state.record().message());
    }

    #[test]
    fn deleting_from_a_full_message_frees_room() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        paste(&mut state, &"x".repeat(500));

        send(&mut state, Message::MessageEdited(Action::Edit(Edit::Backspace)));
        send(&mut state, Message::MessageEdited(Action::Edit(Edit::Insert('!'))));

        assert_eq!(state.record().message_len(), 500);
        assert!(state.record().message().ends_with("x!"));
    }

    #[test]
    fn trailing_newline_is_part_of_the_message() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        paste(&mut state, "abc");

        send(&mut state, Message::MessageEdited(Action::Edit(Edit::Enter)));

        assert_eq!(state.record().message(), "abc\n");
        assert_eq!(editor_text(state.message_editor()), "abc\n");
        assert_eq!(state.message_counter(&I18n::default()), "4/500");
    }

    #[test]
    fn inspection_finishing_after_reset_is_dropped() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        let late = inspected(&state, "late.png", Ok(Attachment::new("/tmp/late.png", 10)));

        send(&mut state, Message::Reset);
        send(&mut state, late);

        assert!(state.record().file().is_none());
    }

    #[test]
    fn inspection_finishing_on_thank_you_screen_is_dropped() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        fill_valid(&mut state);
        send(&mut state, Message::Submit);
        send(
            &mut state,
            Message::SubmissionCompleted(SubmissionOutcome::success("ok")),
        );

        let late = inspected(&state, "late.png", Ok(Attachment::new("/tmp/late.png", 10)));
        send(&mut state, late);

        assert!(state.record().file().is_none());
    }

    #[test]
    fn newer_pick_supersedes_inspection_in_flight() {
        let mut state = form_with(Arc::new(FixedSubmitter::succeeding()));
        let _ = state.handle_message(
            Message::FileDropped(PathBuf::from("/tmp/first.png")),
            &I18n::default(),
        );
        let first = inspected(&state, "first.png", Ok(Attachment::new("/tmp/first.png", 10)));
        let _ = state.handle_message(
            Message::FileDropped(PathBuf::from("/tmp/second.png")),
            &I18n::default(),
        );

        send(&mut state, first);

        assert!(state.record().file().is_none());
    }
}
