use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};
use crate::error::ApiError;
use crate::gate::{Participation, Viewer};
use crate::models::{CastVoteRequest, EventId, MessageResponse, OptionId, UserId, Vote, VoteId};
use crate::selection::VoteSelection;

pub const DEFAULT_CAST_MESSAGE: &str = "Your vote has been recorded.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteState {
    Loading,
    ResultsOnly,
    Selectable,
    AlreadyVoted,
    Closed,
    Submitting,
}

impl From<Participation> for VoteState {
    fn from(p: Participation) -> Self {
        match p {
            Participation::ResultsOnly => VoteState::ResultsOnly,
            Participation::Selectable => VoteState::Selectable,
            Participation::AlreadyVoted => VoteState::AlreadyVoted,
            Participation::Closed => VoteState::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastRejected {
    #[error("Select an option before voting.")]
    NoSelection,
    #[error("Only participants can vote. Join the event first.")]
    NotParticipant,
    #[error("You have already voted in this poll.")]
    AlreadyVoted,
    #[error("This vote is closed.")]
    Closed,
    #[error("Please wait for the current request to finish.")]
    Busy,
    #[error("That vote no longer exists.")]
    UnknownVote,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Refresh,
    VotesLoaded(Result<Vec<Vote>, ApiError>),
    Select { vote_id: VoteId, option_id: OptionId },
    ToggleExpanded(VoteId),
    Cast(VoteId),
    CastCompleted { vote_id: VoteId, result: Result<MessageResponse, ApiError> },
    ViewerChanged(Viewer),
    DismissAlert,
}

/// Side effects the caller must run and report back as actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchVotes { host_id: UserId, event_id: EventId },
    CastVote(CastVoteRequest),
}

/// All votes of one event as seen by one viewer.
///
/// Counts are never patched locally: a successful cast always ends in a
/// fresh `FetchVotes`, and only that response changes what is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteSection {
    event_id: EventId,
    host_id: UserId,
    viewer: Viewer,
    votes: Vec<Vote>,
    loading: bool,
    /// A refresh asked for while a fetch was already in flight.
    refetch_pending: bool,
    selection: VoteSelection,
    submitting: Option<VoteId>,
    alert: Option<Alert>,
    expanded: HashSet<VoteId>,
}

impl VoteSection {
    pub fn new(event_id: EventId, host_id: UserId, viewer: Viewer) -> (Self, Command) {
        let section = Self {
            event_id,
            host_id,
            viewer,
            votes: Vec::new(),
            loading: true,
            refetch_pending: false,
            selection: VoteSelection::new(),
            submitting: None,
            alert: None,
            expanded: HashSet::new(),
        };
        let command = section.fetch_command();
        (section, command)
    }

    fn fetch_command(&self) -> Command {
        Command::FetchVotes { host_id: self.host_id, event_id: self.event_id }
    }

    pub fn apply(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Refresh => {
                if self.loading {
                    self.refetch_pending = true;
                    return None;
                }
                self.loading = true;
                Some(self.fetch_command())
            }
            Action::VotesLoaded(Ok(votes)) => {
                debug!(event_id = self.event_id, count = votes.len(), "votes loaded");
                self.selection.prune(&votes, &self.viewer);
                self.votes = votes;
                self.finish_loading()
            }
            Action::VotesLoaded(Err(err)) => {
                warn!(event_id = self.event_id, error = %err, "failed to load votes");
                self.alert = Some(Alert::Error(err.to_string()));
                self.finish_loading()
            }
            Action::Select { vote_id, option_id } => {
                if self.submitting.is_some() || self.loading {
                    return None;
                }
                if let Some(vote) = self.votes.iter().find(|v| v.id == vote_id) {
                    self.selection.select(vote, &self.viewer, option_id);
                }
                None
            }
            Action::ToggleExpanded(vote_id) => {
                if !self.expanded.remove(&vote_id) {
                    self.expanded.insert(vote_id);
                }
                None
            }
            Action::Cast(vote_id) => match self.prepare_cast(vote_id) {
                Ok(request) => {
                    info!(vote_id, option_id = request.option_id, "casting vote");
                    self.submitting = Some(vote_id);
                    self.alert = None;
                    Some(Command::CastVote(request))
                }
                Err(rejected) => {
                    debug!(vote_id, reason = %rejected, "cast rejected locally");
                    self.alert = Some(Alert::Error(rejected.to_string()));
                    None
                }
            },
            Action::CastCompleted { vote_id, result } => {
                if self.submitting != Some(vote_id) {
                    warn!(vote_id, "ignoring result for a cast that is not in flight");
                    return None;
                }
                self.submitting = None;
                match result {
                    Ok(response) => {
                        let message = response.message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| DEFAULT_CAST_MESSAGE.to_string());
                        self.selection.clear(vote_id);
                        self.alert = Some(Alert::Success(message));
                        self.loading = true;
                        Some(self.fetch_command())
                    }
                    Err(err) => {
                        warn!(vote_id, error = %err, "cast failed");
                        self.alert = Some(Alert::Error(err.to_string()));
                        None
                    }
                }
            }
            Action::ViewerChanged(viewer) => {
                if viewer != self.viewer {
                    self.viewer = viewer;
                    self.selection.clear_all();
                }
                None
            }
            Action::DismissAlert => {
                self.alert = None;
                None
            }
        }
    }

    /// The in-flight fetch may predate the change a pending refresh asked
    /// for, so that refresh is issued now.
    fn finish_loading(&mut self) -> Option<Command> {
        if std::mem::take(&mut self.refetch_pending) {
            debug!(event_id = self.event_id, "issuing deferred refresh");
            return Some(self.fetch_command());
        }
        self.loading = false;
        None
    }

    fn prepare_cast(&self, vote_id: VoteId) -> Result<CastVoteRequest, CastRejected> {
        if self.submitting.is_some() || self.loading {
            return Err(CastRejected::Busy);
        }
        let vote = self.vote(vote_id).ok_or(CastRejected::UnknownVote)?;
        match Participation::of(vote, &self.viewer) {
            Participation::Closed => return Err(CastRejected::Closed),
            Participation::AlreadyVoted => return Err(CastRejected::AlreadyVoted),
            Participation::ResultsOnly => return Err(CastRejected::NotParticipant),
            Participation::Selectable => {}
        }
        let option_id = self.selection.current(vote_id).ok_or(CastRejected::NoSelection)?;
        Ok(CastVoteRequest {
            user_id: self.viewer.user_id,
            event_id: self.event_id,
            vote_id,
            option_id,
        })
    }

    pub fn state_of(&self, vote_id: VoteId) -> Option<VoteState> {
        let vote = self.vote(vote_id)?;
        if self.loading {
            return Some(VoteState::Loading);
        }
        if self.submitting == Some(vote_id) {
            return Some(VoteState::Submitting);
        }
        Some(Participation::of(vote, &self.viewer).into())
    }

    pub fn vote(&self, vote_id: VoteId) -> Option<&Vote> {
        self.votes.iter().find(|v| v.id == vote_id)
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn selection(&self) -> &VoteSelection {
        &self.selection
    }

    pub fn is_expanded(&self, vote_id: VoteId) -> bool {
        self.expanded.contains(&vote_id)
    }
}
