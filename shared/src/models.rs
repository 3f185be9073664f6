use serde::{Serialize, Deserialize};
use time::{Duration, PrimitiveDateTime};
use thiserror::Error;
use crate::tally;

pub type EventId = i64;
pub type UserId = i64;
pub type VoteId = i64;
pub type OptionId = i64;

time::serde::format_description!(
    local_date_time,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub current_male_participants: u32,
    pub max_male_participants_count: u32,
    pub current_female_participants: u32,
    pub max_female_participants_count: u32,
}

impl Capacity {
    /// Full only when both groups are at their limit.
    pub fn is_full(&self) -> bool {
        self.current_male_participants >= self.max_male_participants_count
            && self.current_female_participants >= self.max_female_participants_count
    }

    pub fn is_available(&self) -> bool {
        !self.is_full()
    }

    pub fn remaining_male(&self) -> u32 {
        self.max_male_participants_count.saturating_sub(self.current_male_participants)
    }

    pub fn remaining_female(&self) -> u32 {
        self.max_female_participants_count.saturating_sub(self.current_female_participants)
    }

    pub fn total_current(&self) -> u32 {
        self.current_male_participants + self.current_female_participants
    }

    pub fn total_max(&self) -> u32 {
        self.max_male_participants_count + self.max_female_participants_count
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatingEventCard {
    pub id: EventId,
    pub title: String,
    pub hostname: String,
    #[serde(with = "local_date_time")]
    pub event_date: PrimitiveDateTime,
    pub location: String,
    #[serde(flatten)]
    pub capacity: Capacity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatingEvent {
    pub id: EventId,
    pub title: String,
    pub hostname: String,
    #[serde(default)]
    pub host_user_id: Option<UserId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "local_date_time")]
    pub event_date: PrimitiveDateTime,
    pub location: String,
    #[serde(flatten)]
    pub capacity: Capacity,
}

impl DatingEvent {
    pub fn is_hosted_by(&self, user_id: UserId) -> bool {
        self.host_user_id == Some(user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

impl EventStatus {
    /// Events starting within the next day count as active.
    pub fn at(event_date: PrimitiveDateTime, now: PrimitiveDateTime) -> Self {
        if event_date < now {
            EventStatus::Completed
        } else if event_date - now < Duration::hours(24) {
            EventStatus::Active
        } else {
            EventStatus::Upcoming
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Active => "In progress",
            EventStatus::Completed => "Completed",
        }
    }
}

/// Picks one event that still has seats. `roll` is expected in `[0, 1)`.
pub fn recommend_event(events: &[DatingEventCard], roll: f64) -> Option<&DatingEventCard> {
    let available: Vec<_> = events.iter()
        .filter(|event| event.capacity.is_available())
        .collect();
    if available.is_empty() {
        return None;
    }
    let idx = ((roll.clamp(0.0, 1.0) * available.len() as f64) as usize).min(available.len() - 1);
    Some(available[idx])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOptionResponse {
    pub option_id: OptionId,
    pub option_value: String,
    #[serde(default)]
    pub vote_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub vote_id: VoteId,
    pub title: String,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default)]
    pub total_participants: u32,
    pub options: Vec<VoteOptionResponse>,
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub selected_option_id: Option<OptionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOption {
    pub id: OptionId,
    pub text: String,
    pub count: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterStatus {
    NotVoted,
    Voted(OptionId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub title: String,
    pub closed: bool,
    pub options: Vec<VoteOption>,
    pub total_votes: u32,
    pub status: VoterStatus,
}

impl Vote {
    pub fn has_voted(&self) -> bool {
        matches!(self.status, VoterStatus::Voted(_))
    }

    pub fn selected_option_id(&self) -> Option<OptionId> {
        match self.status {
            VoterStatus::Voted(id) => Some(id),
            VoterStatus::NotVoted => None,
        }
    }

    pub fn has_option(&self, option_id: OptionId) -> bool {
        self.options.iter().any(|opt| opt.id == option_id)
    }

    pub fn option(&self, option_id: OptionId) -> Option<&VoteOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VoteDataError {
    #[error("Vote {0} is marked as voted but has no selected option")]
    MissingSelection(VoteId),
    #[error("Vote {vote_id} references unknown option {option_id}")]
    UnknownOption { vote_id: VoteId, option_id: OptionId },
    #[error("Vote {vote_id} repeats option id {option_id}")]
    DuplicateOptionId { vote_id: VoteId, option_id: OptionId },
}

impl TryFrom<VoteResponse> for Vote {
    type Error = VoteDataError;

    fn try_from(resp: VoteResponse) -> Result<Self, Self::Error> {
        let vote_id = resp.vote_id;
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = resp.options.iter().find(|opt| !seen.insert(opt.option_id)) {
            return Err(VoteDataError::DuplicateOptionId { vote_id, option_id: dup.option_id });
        }

        let counts: Vec<u32> = resp.options.iter().map(|opt| opt.vote_count).collect();
        let percentages = tally::percentages(&counts, resp.total_participants);
        let options: Vec<VoteOption> = resp.options.into_iter()
            .zip(percentages)
            .map(|(opt, percentage)| VoteOption {
                id: opt.option_id,
                text: opt.option_value,
                count: opt.vote_count,
                percentage,
            })
            .collect();

        let status = match (resp.has_voted, resp.selected_option_id) {
            (false, _) => VoterStatus::NotVoted,
            (true, None) => return Err(VoteDataError::MissingSelection(vote_id)),
            (true, Some(option_id)) if !options.iter().any(|opt| opt.id == option_id) => {
                return Err(VoteDataError::UnknownOption { vote_id, option_id });
            }
            (true, Some(option_id)) => VoterStatus::Voted(option_id),
        };

        Ok(Vote {
            id: vote_id,
            title: resp.title,
            closed: resp.is_closed,
            options,
            total_votes: resp.total_participants,
            status,
        })
    }
}

pub fn votes_from_responses(responses: Vec<VoteResponse>) -> Result<Vec<Vote>, VoteDataError> {
    responses.into_iter().map(Vote::try_from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoteRequest {
    pub title: String,
    pub options: Vec<String>,
}

/// Path parameters of the cast-vote PATCH; it carries no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastVoteRequest {
    pub user_id: UserId,
    pub event_id: EventId,
    pub vote_id: VoteId,
    pub option_id: OptionId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub location: String,
    #[serde(with = "local_date_time")]
    pub event_date_time: PrimitiveDateTime,
    pub max_male_participants_count: u32,
    pub max_female_participants_count: u32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindEmailRequest {
    pub email: String,
}
