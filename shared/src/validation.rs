use time::PrimitiveDateTime;
use crate::error::{ApiError, ErrorCode};
use crate::models::{CreateEventRequest, CreateVoteRequest, FindEmailRequest, LoginRequest, SignupRequest};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_OPTION_LENGTH: usize = 50;
pub const MAX_OPTIONS: usize = 10;
pub const MIN_OPTIONS: usize = 2;
pub const MIN_PARTICIPANTS: u32 = 1;
pub const MAX_PARTICIPANTS: u32 = 15;
pub const DEFAULT_PARTICIPANTS: u32 = 5;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    TitleRequired,
    #[error("Title exceeds maximum length of {MAX_TITLE_LENGTH}")]
    TitleTooLong,
    #[error("Enter at least {MIN_OPTIONS} options")]
    TooFewOptions,
    #[error("Too many options (maximum {MAX_OPTIONS})")]
    TooManyOptions,
    #[error("Option {0} exceeds maximum length of {MAX_OPTION_LENGTH}")]
    OptionTooLong(usize),
    #[error("Please enter a location")]
    LocationRequired,
    #[error("The event must start in the future")]
    EventInPast,
    #[error("Participants per group must be between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS}")]
    ParticipantsOutOfRange,
    #[error("Name must be at least {MIN_NAME_LENGTH} characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your email address")]
    EmailRequired,
    #[error("This email address is already in use.")]
    EmailTaken,
    #[error("Please enter a phone number")]
    PhoneRequired,
    #[error("Please enter your password")]
    PasswordRequired,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_vote_request(request: &CreateVoteRequest) -> Result<(), ValidationError> {
    if request.title.trim().is_empty() { return Err(ValidationError::TitleRequired); }
    if char_len(&request.title) > MAX_TITLE_LENGTH { return Err(ValidationError::TitleTooLong); }
    if request.options.len() < MIN_OPTIONS { return Err(ValidationError::TooFewOptions); }
    if request.options.len() > MAX_OPTIONS { return Err(ValidationError::TooManyOptions); }
    if request.options.iter().any(|opt| opt.trim().is_empty()) { return Err(ValidationError::TooFewOptions); }
    if let Some(idx) = request.options.iter().position(|opt| char_len(opt) > MAX_OPTION_LENGTH) {
        return Err(ValidationError::OptionTooLong(idx + 1));
    }
    Ok(())
}

/// Form state for a new vote. Starts with two blank options; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteDraft {
    pub title: String,
    options: Vec<String>,
}

impl Default for VoteDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
        }
    }
}

impl VoteDraft {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn can_add_option(&self) -> bool {
        self.options.len() < MAX_OPTIONS
    }

    pub fn can_remove_option(&self) -> bool {
        self.options.len() > MIN_OPTIONS
    }

    /// Ignored once the draft holds the maximum number of options.
    pub fn add_option(&mut self) -> bool {
        if !self.can_add_option() {
            return false;
        }
        self.options.push(String::new());
        true
    }

    pub fn remove_option(&mut self, index: usize) -> bool {
        if !self.can_remove_option() || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    pub fn set_option(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.options.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Blank options are dropped before the count is checked.
    pub fn to_request(&self) -> Result<CreateVoteRequest, ValidationError> {
        let request = CreateVoteRequest {
            title: self.title.trim().to_string(),
            options: self.options.iter()
                .map(|opt| opt.trim())
                .filter(|opt| !opt.is_empty())
                .map(str::to_string)
                .collect(),
        };
        validate_vote_request(&request)?;
        Ok(request)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub event_date_time: PrimitiveDateTime,
    pub max_male: u32,
    pub max_female: u32,
    pub description: String,
}

impl EventDraft {
    pub fn new(event_date_time: PrimitiveDateTime) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            event_date_time,
            max_male: DEFAULT_PARTICIPANTS,
            max_female: DEFAULT_PARTICIPANTS,
            description: String::new(),
        }
    }

    pub fn adjust_male(&mut self, delta: i32) {
        self.max_male = clamp_participants(self.max_male, delta);
    }

    pub fn adjust_female(&mut self, delta: i32) {
        self.max_female = clamp_participants(self.max_female, delta);
    }

    pub fn to_request(&self, now: PrimitiveDateTime) -> Result<CreateEventRequest, ValidationError> {
        let title = self.title.trim();
        let location = self.location.trim();
        if title.is_empty() { return Err(ValidationError::TitleRequired); }
        if char_len(title) > MAX_TITLE_LENGTH { return Err(ValidationError::TitleTooLong); }
        if location.is_empty() { return Err(ValidationError::LocationRequired); }
        if self.event_date_time <= now { return Err(ValidationError::EventInPast); }
        let range = MIN_PARTICIPANTS..=MAX_PARTICIPANTS;
        if !range.contains(&self.max_male) || !range.contains(&self.max_female) {
            return Err(ValidationError::ParticipantsOutOfRange);
        }

        let description = self.description.trim();
        Ok(CreateEventRequest {
            title: title.to_string(),
            location: location.to_string(),
            event_date_time: self.event_date_time,
            max_male_participants_count: self.max_male,
            max_female_participants_count: self.max_female,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

fn clamp_participants(current: u32, delta: i32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(MIN_PARTICIPANTS), i64::from(MAX_PARTICIPANTS)) as u32
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub confirm_password: Option<ValidationError>,
}

impl SignupErrors {
    /// Server rejections that belong to a single field, e.g. a taken email.
    pub fn from_api_error(err: &ApiError) -> Option<Self> {
        match err.code()? {
            ErrorCode::DuplicateEmail => Some(Self {
                email: Some(ValidationError::EmailTaken),
                ..Self::default()
            }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

impl SignupForm {
    /// Checks every field so the form can show all problems at once.
    pub fn validate(&self) -> Result<SignupRequest, SignupErrors> {
        let errors = SignupErrors {
            name: (char_len(&self.name) < MIN_NAME_LENGTH).then_some(ValidationError::NameTooShort),
            email: (!self.email.contains('@')).then_some(ValidationError::InvalidEmail),
            phone: self.phone.is_empty().then_some(ValidationError::PhoneRequired),
            password: (char_len(&self.password) < MIN_PASSWORD_LENGTH).then_some(ValidationError::PasswordTooShort),
            confirm_password: (self.password != self.confirm_password).then_some(ValidationError::PasswordMismatch),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        })
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if email.trim().is_empty() { return Err(ValidationError::EmailRequired); }
    if password.is_empty() { return Err(ValidationError::PasswordRequired); }
    Ok(LoginRequest { email: email.trim().to_string(), password: password.to_string() })
}

pub fn validate_find_email(email: &str) -> Result<FindEmailRequest, ValidationError> {
    if email.trim().is_empty() { return Err(ValidationError::EmailRequired); }
    Ok(FindEmailRequest { email: email.trim().to_string() })
}
