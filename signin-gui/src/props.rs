use std::{fmt, path::Path, str::FromStr};

use iced::{widget::text_input, Task};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Whether the form is waiting for input or a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown submission state {0:?}")]
pub struct UnknownState(pub String);

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Parses a state, falling back to [`SubmissionState::Idle`] for values
    /// that are not recognized.
    pub fn from_str_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: UnknownState| {
            tracing::warn!("{}, rendering the idle form", e);
            SubmissionState::Idle
        })
    }
}

impl FromStr for SubmissionState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(SubmissionState::Idle),
            "submitting" => Ok(SubmissionState::Submitting),
            _ => Err(UnknownState(s.to_string())),
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Submitting => write!(f, "submitting"),
        }
    }
}

impl<'de> Deserialize<'de> for SubmissionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(s)) => Ok(SubmissionState::from_str_lenient(&s)),
            other => {
                tracing::warn!(
                    "unknown submission state {:?}, rendering the idle form",
                    other
                );
                Ok(SubmissionState::Idle)
            }
        }
    }
}

/// Handle on the email input widget.
///
/// The form only forwards it to the input, the owner uses it to focus the
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRef(text_input::Id);

impl InputRef {
    pub fn new() -> Self {
        Self(text_input::Id::unique())
    }

    pub fn id(&self) -> text_input::Id {
        self.0.clone()
    }

    pub fn focus<T>(&self) -> Task<T> {
        text_input::focus(self.0.clone())
    }
}

impl Default for InputRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the sign-in form is rendered from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Props {
    /// Value of the email input, empty when absent.
    pub email: Option<String>,
    pub email_error: Option<String>,
    pub form_error: Option<String>,
    #[serde(skip)]
    pub input_ref: Option<InputRef>,
    pub state: SubmissionState,
}

#[derive(Debug, Error)]
pub enum PropsError {
    #[error("failed to read props: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse props: {0}")]
    Json(#[from] serde_json::Error),
}

impl Props {
    pub fn from_json(s: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PropsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_submission_state() {
        assert_eq!("idle".parse::<SubmissionState>(), Ok(SubmissionState::Idle));
        assert_eq!("submitting".parse::<SubmissionState>(), Ok(SubmissionState::Submitting));
        assert_eq!(
            "Submitting".parse::<SubmissionState>(),
            Err(UnknownState("Submitting".to_string()))
        );
        assert_eq!(
            SubmissionState::from_str_lenient("loading"),
            SubmissionState::Idle
        );
        assert_eq!(SubmissionState::Submitting.to_string(), "submitting");
    }

    #[test]
    fn props_from_json() {
        let props = Props::from_json(
            r#"{"email": "x@y.com", "emailError": "Invalid email", "state": "submitting"}"#,
        )
        .unwrap();
        assert_eq!(props.email.as_deref(), Some("x@y.com"));
        assert_eq!(props.email_error.as_deref(), Some("Invalid email"));
        assert_eq!(props.form_error, None);
        assert!(props.input_ref.is_none());
        assert!(props.state.is_submitting());

        let props = Props::from_json("{}").unwrap();
        assert_eq!(props.email, None);
        assert_eq!(props.state, SubmissionState::Idle);

        let props = Props::from_json(r#"{"state": "pending"}"#).unwrap();
        assert_eq!(props.state, SubmissionState::Idle);

        let props = Props::from_json(r#"{"email": "x@y.com", "state": null}"#).unwrap();
        assert_eq!(props.email.as_deref(), Some("x@y.com"));
        assert_eq!(props.state, SubmissionState::Idle);

        let props = Props::from_json(r#"{"state": 1}"#).unwrap();
        assert_eq!(props.state, SubmissionState::Idle);

        let props = Props::from_json(r#"{"state": ["submitting"]}"#).unwrap();
        assert_eq!(props.state, SubmissionState::Idle);

        assert!(matches!(
            Props::from_json(r#"{"email": 3}"#),
            Err(PropsError::Json(_))
        ));
    }

    #[test]
    fn input_ref_identity() {
        let input_ref = InputRef::new();
        assert_eq!(input_ref.clone(), input_ref);
        assert_eq!(input_ref.id(), input_ref.clone().id());
        assert_ne!(InputRef::new(), InputRef::new());

        let props = Props {
            input_ref: Some(input_ref.clone()),
            ..Props::default()
        };
        assert_eq!(props.input_ref, Some(input_ref));
    }
}
