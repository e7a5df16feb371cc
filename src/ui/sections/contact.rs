// SPDX-License-Identifier: MPL-2.0
//! Contact form handing a prepared message to the mail client.

use super::{page, PageContext};
use crate::domain::contact::{ContactForm, Field, FieldError, MailDraft, SubmitStatus};
use crate::i18n::fluent::I18n;
use crate::ui::components::section_header;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_editor, text_input, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    SubjectChanged(String),
    MessageEdited(text_editor::Action),
    ClearMessage,
    Submit,
    /// Dismiss the success banner right away.
    WriteAnother,
    /// Dismiss the error banner.
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Validation passed: open the mail client with this draft.
    Launch(MailDraft),
}

pub struct State {
    form: ContactForm,
    editor: text_editor::Content,
    recipient: String,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("form", &self.form)
            .field("recipient", &self.recipient)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            form: ContactForm::new(),
            editor: text_editor::Content::new(),
            recipient: recipient.into(),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SubjectChanged(value) => {
                if self.is_editable() {
                    self.form.set_field(Field::Subject, value);
                }
                Effect::None
            }
            Message::MessageEdited(action) => {
                if self.is_editable() || !action.is_edit() {
                    self.editor.perform(action);
                    self.sync_message();
                }
                Effect::None
            }
            Message::ClearMessage => {
                if self.form.can_clear_message() && self.is_editable() {
                    self.form.clear_message();
                    self.editor = text_editor::Content::new();
                }
                Effect::None
            }
            Message::Submit => match self.form.submit() {
                Some(draft) => {
                    log::debug!("contact form valid, preparing mail link");
                    Effect::Launch(draft)
                }
                None => Effect::None,
            },
            Message::WriteAnother | Message::Retry => {
                self.form.reset_status();
                Effect::None
            }
        }
    }

    /// The mail client opened.
    pub fn complete(&mut self, now: Instant) {
        self.form.complete(now);
        if self.form.status() == SubmitStatus::Success {
            self.editor = text_editor::Content::new();
        }
    }

    /// The mail client could not be opened.
    pub fn fail(&mut self) {
        self.form.fail();
    }

    /// Drops the success banner once it has been shown for `after`.
    pub fn tick(&mut self, now: Instant, after: Duration) -> bool {
        self.form.tick(now, after)
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Whether the banner countdown needs ticks.
    #[must_use]
    pub fn awaiting_reset(&self) -> bool {
        self.form.awaiting_reset()
    }

    fn is_editable(&self) -> bool {
        self.form.status() != SubmitStatus::Submitting
    }

    fn sync_message(&mut self) {
        let text = self.editor.text();
        if text != self.form.value(Field::Message) {
            self.form.set_field(Field::Message, text);
        }
    }

    pub fn view<'a>(&'a self, ctx: PageContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let errors = self.form.errors();
        let editable = self.is_editable();

        let mut subject = text_input(
            &i18n.tr("contact-subject-placeholder"),
            self.form.value(Field::Subject),
        )
        .padding(spacing::SM)
        .size(typography::BODY_LG);
        if editable {
            subject = subject.on_input(Message::SubjectChanged);
        }

        let mut message = text_editor(&self.editor)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .height(Length::Fixed(sizing::MESSAGE_HEIGHT))
            .padding(spacing::SM);
        if editable {
            message = message.on_action(Message::MessageEdited);
        }

        let mut fields = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("contact-subject-label")).size(typography::BODY))
            .push(subject);
        if let Some(error) = errors.get(Field::Subject) {
            fields = fields.push(field_error(i18n, error));
        }
        fields = fields
            .push(Space::new().height(spacing::XS))
            .push(Text::new(i18n.tr("contact-message-label")).size(typography::BODY))
            .push(message);
        if let Some(error) = errors.get(Field::Message) {
            fields = fields.push(field_error(i18n, error));
        }

        let submitting = self.form.status() == SubmitStatus::Submitting;
        let submit_label = if submitting {
            i18n.tr("contact-submitting")
        } else {
            i18n.tr("contact-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        if self.form.can_submit() {
            submit = submit.on_press(Message::Submit);
        }

        let mut actions = Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill));
        if self.form.can_clear_message() && editable {
            actions = actions.push(
                button(Text::new(i18n.tr("contact-clear-message")))
                    .on_press(Message::ClearMessage)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::unselected),
            );
        }
        actions = actions.push(submit);

        let mut form = Column::new().spacing(spacing::MD);
        if let Some(banner) = status_banner(i18n, self.form.status()) {
            form = form.push(banner);
        }
        form = form.push(fields).push(actions);

        let content = Column::new()
            .spacing(spacing::LG)
            .push(section_header(i18n.tr("contact-title")))
            .push(Text::new(i18n.tr("contact-subtitle")).size(typography::BODY_LG))
            .push(
                Text::new(i18n.tr_with_args(
                    "contact-recipient",
                    &[("address", self.recipient.as_str())],
                ))
                .size(typography::BODY_SM),
            )
            .push(
                Container::new(form)
                    .width(Length::Fill)
                    .padding(spacing::LG)
                    .style(styles::container::panel),
            );

        page(content)
    }
}

fn field_error<'a>(i18n: &I18n, error: FieldError) -> Element<'a, Message> {
    Text::new(i18n.tr(error.i18n_key()))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}

fn status_banner<'a>(i18n: &I18n, status: SubmitStatus) -> Option<Element<'a, Message>> {
    let (accent, body, action) = match status {
        SubmitStatus::Idle | SubmitStatus::Submitting => return None,
        SubmitStatus::Success => (
            palette::SUCCESS_500,
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("contact-success-title")).size(typography::TITLE_SM))
                .push(Text::new(i18n.tr("contact-success-body")).size(typography::BODY)),
            button(Text::new(i18n.tr("contact-write-another"))).on_press(Message::WriteAnother),
        ),
        SubmitStatus::Error => (
            palette::ERROR_500,
            Column::new().push(Text::new(i18n.tr("contact-error-body")).size(typography::BODY)),
            button(Text::new(i18n.tr("contact-retry"))).on_press(Message::Retry),
        ),
    };

    Some(
        Container::new(
            Row::new()
                .spacing(spacing::MD)
                .push(body.width(Length::Fill))
                .push(action.style(styles::button::unselected)),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::banner(accent))
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(subject: &str, message: &str) -> State {
        let mut state = State::new("me@example.com");
        state.handle(Message::SubjectChanged(subject.into()));
        state.handle(Message::MessageEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new(message.to_string())),
        )));
        state
    }

    #[test]
    fn editor_text_reaches_form() {
        let state = filled("Hi", "World");
        assert_eq!(state.form().value(Field::Message), "World");
    }

    #[test]
    fn typed_line_breaks_are_kept() {
        let mut state = filled("Hi", "World");
        state.handle(Message::MessageEdited(text_editor::Action::Edit(
            text_editor::Edit::Enter,
        )));
        assert_eq!(state.form().value(Field::Message), "World\n");

        state.handle(Message::MessageEdited(text_editor::Action::Edit(
            text_editor::Edit::Enter,
        )));
        assert_eq!(state.form().value(Field::Message), "World\n\n");
    }

    #[test]
    fn empty_subject_blocks_launch() {
        let mut state = filled("", "hello");
        assert_eq!(state.handle(Message::Submit), Effect::None);
        assert_eq!(state.form().errors().count(), 1);
        assert!(state.form().errors().get(Field::Subject).is_some());
    }

    #[test]
    fn valid_form_launches_and_succeeds() {
        let mut state = filled("Hi", "World");
        let effect = state.handle(Message::Submit);
        assert_eq!(
            effect,
            Effect::Launch(MailDraft {
                subject: "Hi".into(),
                body: "World".into(),
            })
        );
        assert_eq!(state.form().status(), SubmitStatus::Submitting);

        state.complete(Instant::now());
        assert_eq!(state.form().status(), SubmitStatus::Success);
        assert_eq!(state.form().value(Field::Subject), "");
        assert!(state.awaiting_reset());
    }

    #[test]
    fn fields_are_locked_while_submitting() {
        let mut state = filled("Hi", "World");
        state.handle(Message::Submit);
        state.handle(Message::SubjectChanged("changed".into()));
        assert_eq!(state.form().value(Field::Subject), "Hi");
    }

    #[test]
    fn failure_then_retry_returns_to_idle() {
        let mut state = filled("Hi", "World");
        state.handle(Message::Submit);
        state.fail();
        assert_eq!(state.form().status(), SubmitStatus::Error);
        assert_eq!(state.form().value(Field::Message), "World");

        state.handle(Message::Retry);
        assert_eq!(state.form().status(), SubmitStatus::Idle);
    }

    #[test]
    fn clear_message_empties_editor() {
        let mut state = filled("Hi", "World");
        state.handle(Message::ClearMessage);
        assert_eq!(state.form().value(Field::Message), "");
        assert!(!state.form().can_clear_message());
    }

    #[test]
    fn success_banner_expires() {
        let mut state = filled("Hi", "World");
        state.handle(Message::Submit);
        let now = Instant::now();
        state.complete(now);
        assert!(!state.tick(now + Duration::from_secs(1), Duration::from_secs(5)));
        assert!(state.tick(now + Duration::from_secs(5), Duration::from_secs(5)));
        assert_eq!(state.form().status(), SubmitStatus::Idle);
    }
}
