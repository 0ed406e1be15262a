/// A login entry of the built-in credential list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub username: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

pub const USERS: &[User] = &[
    User {
        username: "admin",
        password: "1234",
        role: "admin",
    },
    User {
        username: "superadmin",
        password: "1234",
        role: "superadmin",
    },
    User {
        username: "branch1",
        password: "1234",
        role: "branch",
    },
    User {
        username: "branch2",
        password: "1234",
        role: "branch",
    },
];

/// Exact username + password match.
pub fn find_user(username: &str, password: &str) -> Option<&'static User> {
    USERS
        .iter()
        .find(|u| u.username == username && u.password == password)
}
