use tracing::info;
use crate::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Host => "HOST",
            Role::Guest => "GUEST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestUser {
    pub id: UserId,
    pub name: &'static str,
    pub role: Role,
}

/// Seeded accounts of the development backend.
pub const TEST_USERS: &[TestUser] = &[
    TestUser { id: 1, name: "GrewMeet Official", role: Role::Host },
    TestUser { id: 2, name: "책벌레들", role: Role::Host },
    TestUser { id: 3, name: "영화광클럽", role: Role::Host },
    TestUser { id: 4, name: "맛집탐방대", role: Role::Host },
    TestUser { id: 5, name: "김민준", role: Role::Guest },
    TestUser { id: 6, name: "이서연", role: Role::Guest },
    TestUser { id: 7, name: "박준호", role: Role::Guest },
    TestUser { id: 8, name: "최은지", role: Role::Guest },
    TestUser { id: 9, name: "정현우", role: Role::Guest },
    TestUser { id: 10, name: "강수진", role: Role::Guest },
    TestUser { id: 11, name: "이동현", role: Role::Guest },
    TestUser { id: 12, name: "김지은", role: Role::Guest },
    TestUser { id: 13, name: "홍길동", role: Role::Guest },
    TestUser { id: 14, name: "김영희", role: Role::Guest },
];

pub fn find_test_user(id: UserId) -> Option<&'static TestUser> {
    TEST_USERS.iter().find(|user| user.id == id)
}

/// The user the app is acting as. Starts empty; only `set_user` and `clear` change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn user(&self) -> Option<&'static TestUser> {
        self.user_id.and_then(find_test_user)
    }

    pub fn is_host(&self) -> bool {
        self.user().map_or(false, |user| user.role == Role::Host)
    }

    pub fn set_user(&mut self, id: UserId) {
        info!(user_id = id, "session user set");
        self.user_id = Some(id);
    }

    pub fn clear(&mut self) {
        info!("session user cleared");
        self.user_id = None;
    }
}
