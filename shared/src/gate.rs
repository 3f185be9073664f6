use crate::models::{UserId, Vote};

/// Who is looking at a vote. Participation comes from the event, not the vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: UserId,
    pub is_participant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    /// Aggregated results only; the viewer is not a participant.
    ResultsOnly,
    Selectable,
    AlreadyVoted,
    Closed,
}

impl Participation {
    /// Evaluated on every read so it always reflects the latest vote and viewer.
    pub fn of(vote: &Vote, viewer: &Viewer) -> Self {
        if vote.closed {
            Participation::Closed
        } else if vote.has_voted() {
            Participation::AlreadyVoted
        } else if !viewer.is_participant {
            Participation::ResultsOnly
        } else {
            Participation::Selectable
        }
    }

    pub fn can_select(self) -> bool {
        self == Participation::Selectable
    }

    pub fn shows_results(self) -> bool {
        !self.can_select()
    }
}
