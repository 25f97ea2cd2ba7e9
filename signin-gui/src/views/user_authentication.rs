use iced::{widget::text_input, Length};
use signin_ui::{
    component::{button, form, notification, text},
    theme,
    widget::*,
};

use crate::{
    props::{InputRef, Props},
    tree::{ButtonType, Input, InputType, Kind, Node},
};

pub const TITLE: &str = "Sign in or sign up";
pub const SUBTITLE: &str = "Sign in to your account";
pub const INTRO: &str = "Enter your email address to sign in, or create an account.";
pub const EMAIL_LABEL: &str = "Email address";
pub const EMAIL_PLACEHOLDER: &str = "you@example.com";
pub const SIGN_IN: &str = "Sign in";
pub const AUTHENTICATING: &str = "Authenticating…";

const EMAIL_ID: &str = "email";
const EMAIL_ERROR_ID: &str = "email-error";
const FORM_ERROR_ID: &str = "form-error";

/// Sign-in form as an element tree.
pub fn user_authentication(props: &Props) -> Node {
    let submitting = props.state.is_submitting();

    let email = Node::new(Kind::Input(Input {
        input_type: InputType::Email,
        name: EMAIL_ID.to_string(),
        value: props.email.clone().unwrap_or_default(),
        placeholder: Some(EMAIL_PLACEHOLDER.to_string()),
        autocomplete: Some("email".to_string()),
        disabled: submitting,
        invalid: props.email_error.is_some(),
        described_by: props.email_error.as_ref().map(|_| EMAIL_ERROR_ID.to_string()),
    }))
    .id(EMAIL_ID);

    let email_field = Node::new(Kind::Group)
        .push(
            Node::new(Kind::Label {
                target: EMAIL_ID.to_string(),
            })
            .text(EMAIL_LABEL),
        )
        .push(email)
        .push_maybe(
            props
                .email_error
                .as_ref()
                .map(|error| Node::new(Kind::Alert).id(EMAIL_ERROR_ID).text(error)),
        );

    let submit = Node::new(Kind::Button {
        kind: ButtonType::Submit,
        disabled: submitting,
    })
    .text(if submitting { AUTHENTICATING } else { SIGN_IN });

    Node::new(Kind::Form)
        .push(Node::new(Kind::Heading(1)).text(TITLE))
        .push(Node::new(Kind::Heading(2)).text(SUBTITLE))
        .push(Node::new(Kind::Paragraph).text(INTRO))
        .push(email_field)
        .push_maybe(
            props
                .form_error
                .as_ref()
                .map(|error| Node::new(Kind::Alert).id(FORM_ERROR_ID).text(error)),
        )
        .push(submit)
}

struct Handlers<Msg> {
    on_input: fn(String) -> Msg,
    on_submit: Msg,
    input_id: Option<text_input::Id>,
}

/// Sign-in form drawn with iced widgets.
///
/// `on_input` builds the message sent on every edit of the email input,
/// `on_submit` is sent when the user presses the submit button or Enter in
/// the input.
pub fn user_authentication_view<'a, Msg: Clone + 'a>(
    props: &Props,
    on_input: fn(String) -> Msg,
    on_submit: Msg,
) -> Element<'a, Msg> {
    let handlers = Handlers {
        on_input,
        on_submit,
        input_id: props.input_ref.as_ref().map(InputRef::id),
    };
    node_view(&user_authentication(props), &handlers)
}

fn node_view<'a, Msg: Clone + 'a>(node: &Node, handlers: &Handlers<Msg>) -> Element<'a, Msg> {
    match &node.kind {
        Kind::Form => Column::with_children(
            node.children
                .iter()
                .map(|child| node_view(child, handlers)),
        )
        .spacing(20)
        .width(Length::Fill)
        .into(),
        Kind::Group => Column::with_children(
            node.children
                .iter()
                .map(|child| node_view(child, handlers)),
        )
        .spacing(5)
        .width(Length::Fill)
        .into(),
        Kind::Heading(level) => text::heading(*level, node.text_content()).into(),
        Kind::Paragraph => text::p1_regular(node.text_content())
            .style(theme::text::secondary)
            .into(),
        Kind::Label { .. } => text::p2_medium(node.text_content())
            .style(theme::text::secondary)
            .into(),
        Kind::Input(input) => {
            let value = form::Value {
                value: input.value.clone(),
                valid: !input.invalid,
            };
            let placeholder = input.placeholder.as_deref().unwrap_or_default();
            let form = if input.disabled {
                form::Form::new_disabled(placeholder, &value)
            } else {
                form::Form::new(placeholder, &value, handlers.on_input)
                    .on_submit_maybe(Some(handlers.on_submit.clone()))
            };
            let form = match &handlers.input_id {
                Some(id) => form.id(id.clone()),
                None => form,
            };
            form.size(16).padding(10).into()
        }
        Kind::Alert => notification::alert(node.text_content()).into(),
        Kind::Button { kind, disabled } => button::primary(None, node.text_content())
            .on_press_maybe(
                (*kind == ButtonType::Submit && !*disabled).then(|| handlers.on_submit.clone()),
            )
            .width(Length::Fill)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        props::SubmissionState,
        query::{ByRole, QueryError, TextMatch},
        testing::Screen,
        tree::Role,
    };

    fn email_input(screen: &Screen) -> &Node {
        screen
            .get_by_label_text(TextMatch::contains("email address"))
            .unwrap()
    }

    #[test]
    fn idle_form_without_errors() {
        let mut screen = Screen::render(&Props::default());

        // Headings and the explanation paragraph.
        screen
            .get_by_role(
                Role::Heading,
                ByRole::default()
                    .name(TextMatch::contains("sign in or sign up"))
                    .level(1),
            )
            .unwrap();
        screen
            .get_by_role(
                Role::Heading,
                ByRole::default()
                    .name(TextMatch::contains("sign in to your account"))
                    .level(2),
            )
            .unwrap();
        screen
            .get_by_text(
                TextMatch::contains("or create an account"),
                Some(Role::Paragraph),
            )
            .unwrap();

        // Empty and enabled email input.
        let input = email_input(&screen);
        assert_eq!(input.value(), Some(""));
        assert!(!input.is_disabled());
        assert!(!input.is_invalid());
        assert_eq!(input.input().unwrap().input_type, InputType::Email);

        // No alert without errors.
        assert_eq!(
            screen.query_by_role(Role::Alert, ByRole::default()),
            Ok(None)
        );

        // The user can type an email.
        screen
            .type_text(TextMatch::contains("email address"), "jane.doe@example.com")
            .unwrap();
        assert_eq!(email_input(&screen).value(), Some("jane.doe@example.com"));

        let sign_in = screen
            .get_by_role(
                Role::Button,
                ByRole::default().name(TextMatch::contains("sign in")),
            )
            .unwrap();
        assert!(!sign_in.is_disabled());
        assert_eq!(sign_in.own_text(), SIGN_IN);
    }

    #[test]
    fn email_is_the_input_value() {
        for email in ["a@b.com", "x@y.com", "  spaced@example.org ", "ünïcødé@exämple.com"] {
            let props = Props {
                email: Some(email.to_string()),
                ..Default::default()
            };
            let screen = Screen::render(&props);
            assert_eq!(email_input(&screen).value(), Some(email));
        }
    }

    #[test]
    fn email_error_is_displayed_and_describes_the_input() {
        let props = Props {
            email: Some("x@y.com".to_string()),
            email_error: Some("Invalid email".to_string()),
            ..Default::default()
        };
        let screen = Screen::render(&props);

        let input = screen
            .get_by_role(
                Role::TextBox,
                ByRole::default().description(TextMatch::exact("Invalid email")),
            )
            .unwrap();
        assert_eq!(input.value(), Some("x@y.com"));
        assert_eq!(
            screen.accessible_description(input).as_deref(),
            Some("Invalid email")
        );

        let alert = screen.get_by_role(Role::Alert, ByRole::default()).unwrap();
        assert_eq!(alert.text_content(), "Invalid email");

        let input = screen
            .get_by_role(
                Role::TextBox,
                ByRole::default().name(TextMatch::contains("email address")),
            )
            .unwrap();
        assert!(input.is_invalid());
    }

    #[test]
    fn form_error_is_displayed() {
        let props = Props {
            form_error: Some("Server unavailable".to_string()),
            ..Default::default()
        };
        let screen = Screen::render(&props);

        let alert = screen.get_by_role(Role::Alert, ByRole::default()).unwrap();
        assert_eq!(alert.text_content(), "Server unavailable");
        // A form error does not touch the email field.
        let input = email_input(&screen);
        assert!(!input.is_invalid());
        assert_eq!(screen.accessible_description(input), None);
    }

    #[test]
    fn both_errors_are_rendered_independently() {
        let props = Props {
            email_error: Some("Invalid email".to_string()),
            form_error: Some("Server unavailable".to_string()),
            ..Default::default()
        };
        let screen = Screen::render(&props);

        let alerts: Vec<String> = screen
            .get_all_by_role(Role::Alert, ByRole::default())
            .unwrap()
            .into_iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(alerts, vec!["Invalid email", "Server unavailable"]);
        assert_eq!(
            screen
                .accessible_description(email_input(&screen))
                .as_deref(),
            Some("Invalid email")
        );
    }

    #[test]
    fn submitting_disables_the_input_and_the_button() {
        let props = Props {
            email: Some("x@y.com".to_string()),
            state: SubmissionState::Submitting,
            ..Default::default()
        };
        let mut screen = Screen::render(&props);

        assert!(email_input(&screen).is_disabled());
        assert_eq!(
            screen.query_by_role(
                Role::Button,
                ByRole::default().name(TextMatch::contains("sign in"))
            ),
            Ok(None)
        );
        let authenticating = screen
            .get_by_role(
                Role::Button,
                ByRole::default().name(TextMatch::contains("authenticating")),
            )
            .unwrap();
        assert!(authenticating.is_disabled());
        assert_eq!(
            screen
                .get_all_by_role(Role::Button, ByRole::default())
                .unwrap()
                .len(),
            1
        );

        assert!(matches!(
            screen.type_text(TextMatch::contains("email address"), "more"),
            Err(QueryError::Disabled(_))
        ));
        assert_eq!(email_input(&screen).value(), Some("x@y.com"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let props = Props {
            email: Some("x@y.com".to_string()),
            email_error: Some("Invalid email".to_string()),
            form_error: Some("Server unavailable".to_string()),
            input_ref: Some(InputRef::new()),
            state: SubmissionState::Idle,
        };
        assert_eq!(user_authentication(&props), user_authentication(&props));
        // The input handle is never part of what gets rendered.
        assert_eq!(
            user_authentication(&props),
            user_authentication(&Props {
                input_ref: None,
                ..props.clone()
            })
        );
    }

    #[derive(Debug, Clone)]
    enum Message {
        Edited(String),
        Submit,
    }

    #[test]
    fn iced_view_builds_for_both_states() {
        for state in [SubmissionState::Idle, SubmissionState::Submitting] {
            let props = Props {
                email: Some("x@y.com".to_string()),
                email_error: Some("Invalid email".to_string()),
                form_error: Some("Server unavailable".to_string()),
                input_ref: Some(InputRef::new()),
                state,
            };
            let element = user_authentication_view(&props, Message::Edited, Message::Submit);
            // Two headings, the paragraph, the email field, the form alert and
            // the submit button.
            assert_eq!(element.as_widget().children().len(), 6);

            let element = user_authentication_view(
                &Props {
                    state,
                    ..Default::default()
                },
                Message::Edited,
                Message::Submit,
            );
            assert_eq!(element.as_widget().children().len(), 5);
        }
    }
}
