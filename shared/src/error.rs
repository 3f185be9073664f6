use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::validation::ValidationError;

/// Known backend failures. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[error("You are already participating in this event.")]
    AlreadyParticipating,
    #[error("This event is full. No seats are left for your group.")]
    EventFull,
    #[error("You have reached the maximum number of events you can join at once.")]
    ParticipationLimitExceeded,
    #[error("You have already voted in this poll.")]
    AlreadyVoted,
    #[error("This vote is closed.")]
    VoteClosed,
    #[error("This email address is already in use.")]
    DuplicateEmail,
    #[error("The requested item could not be found.")]
    NotFound,
}

/// Substring table for backends that only send free text.
/// First match wins, so longer or more specific phrases come first.
const KNOWN_PHRASES: &[(&str, ErrorCode)] = &[
    ("보다 많은 이벤트에 참여할 수 없습니다", ErrorCode::ParticipationLimitExceeded),
    ("participation limit", ErrorCode::ParticipationLimitExceeded),
    ("이미 참여", ErrorCode::AlreadyParticipating),
    ("already participating", ErrorCode::AlreadyParticipating),
    ("정원이 가득", ErrorCode::EventFull),
    ("정원 초과", ErrorCode::EventFull),
    ("event full", ErrorCode::EventFull),
    ("event is full", ErrorCode::EventFull),
    ("이미 투표", ErrorCode::AlreadyVoted),
    ("already voted", ErrorCode::AlreadyVoted),
    ("마감된 투표", ErrorCode::VoteClosed),
    ("vote is closed", ErrorCode::VoteClosed),
    ("이미 존재하는 이메일", ErrorCode::DuplicateEmail),
    ("email already exists", ErrorCode::DuplicateEmail),
];

impl ErrorCode {
    pub fn from_message(message: &str) -> Option<Self> {
        let lowered = message.to_lowercase();
        KNOWN_PHRASES.iter()
            .find(|(phrase, _)| lowered.contains(phrase))
            .map(|(_, code)| *code)
    }
}

/// JSON error body. Every field is optional because the backend is not consistent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<ErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub status: u16,
    pub code: Option<ErrorCode>,
    pub message: String,
}

impl ServerError {
    /// Classifies a non-2xx response body. A machine readable `code` wins over
    /// phrase matching; the raw text is kept for anything unrecognised.
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = body.trim();
        let parsed = serde_json::from_str::<ErrorResponse>(body).ok();

        let message = match &parsed {
            Some(resp) => resp.message.clone()
                .or_else(|| resp.error.clone())
                .unwrap_or_else(|| body.to_string()),
            None => serde_json::from_str::<String>(body).unwrap_or_else(|_| body.to_string()),
        };
        let message = if message.is_empty() {
            format!("Request failed with status {status}")
        } else {
            message
        };

        let code = parsed
            .and_then(|resp| resp.code)
            .or_else(|| ErrorCode::from_message(&message))
            .or((status == 404).then_some(ErrorCode::NotFound));

        Self { status, code, message }
    }

    pub fn user_message(&self) -> String {
        match self.code {
            Some(code) => code.to_string(),
            None => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Unable to reach the server. Check your network connection. ({0})")]
    Network(String),
    #[error("{}", .0.user_message())]
    Server(ServerError),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn server(status: u16, body: &str) -> Self {
        ApiError::Server(ServerError::from_response(status, body))
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::Server(err) => err.code,
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server(err) => Some(err.status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
