use std::collections::HashMap;
use tracing::debug;
use crate::gate::{Participation, Viewer};
use crate::models::{OptionId, Vote, VoteId};

/// Tentative, unsubmitted choices. One option per vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteSelection {
    choices: HashMap<VoteId, OptionId>,
}

impl VoteSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the choice was recorded. Ignored unless the vote is
    /// selectable for this viewer and the option belongs to the vote.
    pub fn select(&mut self, vote: &Vote, viewer: &Viewer, option_id: OptionId) -> bool {
        if !Participation::of(vote, viewer).can_select() || !vote.has_option(option_id) {
            debug!(vote_id = vote.id, option_id, "selection ignored");
            return false;
        }
        self.choices.insert(vote.id, option_id);
        true
    }

    pub fn clear(&mut self, vote_id: VoteId) {
        self.choices.remove(&vote_id);
    }

    pub fn clear_all(&mut self) {
        self.choices.clear();
    }

    /// Drops choices for votes that vanished or are no longer selectable.
    pub fn prune(&mut self, votes: &[Vote], viewer: &Viewer) {
        self.choices.retain(|vote_id, option_id| {
            votes.iter()
                .find(|vote| vote.id == *vote_id)
                .map_or(false, |vote| {
                    Participation::of(vote, viewer).can_select() && vote.has_option(*option_id)
                })
        });
    }

    pub fn current(&self, vote_id: VoteId) -> Option<OptionId> {
        self.choices.get(&vote_id).copied()
    }

    pub fn is_selected(&self, vote_id: VoteId, option_id: OptionId) -> bool {
        self.current(vote_id) == Some(option_id)
    }
}
