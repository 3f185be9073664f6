pub mod error;
pub mod models;
pub mod validation;
pub mod tally;
pub mod gate;
pub mod selection;
pub mod vote_section;
pub mod session;
pub mod task;

pub use error::{ApiError, ErrorCode, ErrorResponse, Result, ServerError};
pub use models::*;
pub use validation::*;
pub use gate::{Participation, Viewer};
pub use selection::VoteSelection;
pub use vote_section::{Action, Alert, CastRejected, Command, VoteSection, VoteState};
pub use session::{Role, Session, TestUser, TEST_USERS};
pub use task::TaskScope;

#[cfg(test)]
mod tests;
