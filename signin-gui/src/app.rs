//! Desktop host of the sign-in form.
//!
//! The host owns the form props: it validates the address, flips the form
//! to submitting while the backend works and feeds the outcome back as
//! errors.

use iced::{widget::Space, Length, Task};
use signin_ui::{component::notification, theme, widget::*};
use tracing::{debug, info};

use crate::{
    backend::{BackendError, DebugBackend},
    config::Config,
    props::{InputRef, Props, SubmissionState},
    views,
};

pub const EMPTY_EMAIL: &str = "Please enter your email address.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[derive(Debug, Clone)]
pub enum Msg {
    EmailEdited(String),
    Submit,
    LinkSent(Result<String, BackendError>),
}

pub struct App {
    props: Props,
    sent_to: Option<String>,
    backend: DebugBackend,
}

/// Checks the address is an RFC compliant email with a top level domain.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err(EMPTY_EMAIL);
    }
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .map(|_| ())
    .map_err(|_| INVALID_EMAIL)
}

impl App {
    pub fn new(config: &Config, mut props: Props) -> (Self, Task<Msg>) {
        let input_ref = props.input_ref.get_or_insert_with(InputRef::new).clone();
        let app = Self {
            props,
            sent_to: None,
            backend: DebugBackend::new(&config.backend),
        };
        (app, input_ref.focus())
    }

    pub fn title(&self) -> String {
        views::TITLE.to_string()
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Address the last sign-in link was sent to.
    pub fn sent_to(&self) -> Option<&str> {
        self.sent_to.as_deref()
    }

    pub fn update(&mut self, message: Msg) -> Task<Msg> {
        match message {
            Msg::EmailEdited(email) => {
                if !self.props.state.is_submitting() {
                    self.props.email = Some(email);
                    self.props.email_error = None;
                }
            }
            Msg::Submit => {
                if self.props.state.is_submitting() {
                    return Task::none();
                }
                let email = self
                    .props
                    .email
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                self.props.form_error = None;
                self.sent_to = None;
                if let Err(e) = validate_email(&email) {
                    debug!("Rejected email {:?}: {}", email, e);
                    self.props.email_error = Some(e.to_string());
                    return Task::none();
                }
                info!("Submitting sign-in form for {}", email);
                self.props.email_error = None;
                self.props.state = SubmissionState::Submitting;
                return Task::perform(
                    self.backend.clone().send_sign_in_link(email),
                    Msg::LinkSent,
                );
            }
            Msg::LinkSent(res) => {
                self.props.state = SubmissionState::Idle;
                match res {
                    Ok(email) => self.sent_to = Some(email),
                    Err(e) => self.props.form_error = Some(e.to_string()),
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Msg> {
        let content = Column::new()
            .push_maybe(self.sent_to.as_ref().map(|email| {
                notification::success(format!(
                    "Check your inbox, a sign-in link was sent to {}",
                    email
                ))
            }))
            .push(views::user_authentication_view(
                &self.props,
                Msg::EmailEdited,
                Msg::Submit,
            ))
            .spacing(20);

        Container::new(
            Column::new()
                .push(Space::with_height(Length::FillPortion(1)))
                .push(
                    Container::new(content)
                        .padding(40)
                        .max_width(480.0)
                        .style(theme::container::foreground),
                )
                .push(Space::with_height(Length::FillPortion(2)))
                .align_x(iced::Alignment::Center)
                .width(Length::Fill),
        )
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::background)
        .into()
    }
}
