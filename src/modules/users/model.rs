use crate::validation::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(deserialize_with = "crate::validation::lax::int")]
    pub age: i64,
    pub address: String,
    pub friends: Vec<String>,
}

impl Validate for User {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub friends: Vec<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            friends: user.friends,
        }
    }
}
