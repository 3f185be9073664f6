use std::rc::Rc;
use yew::prelude::*;
use shared::{Session, UserId};

#[derive(Clone, Copy, Default, PartialEq)]
pub struct SessionState(pub Session);

pub enum SessionAction {
    Select(UserId),
    Clear,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            SessionAction::Select(id) => next.set_user(id),
            SessionAction::Clear => next.clear(),
        }
        Rc::new(SessionState(next))
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext is provided by App")
}
