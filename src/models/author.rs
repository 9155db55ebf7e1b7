//! Author value type

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Writer of a book. Owned by exactly one [`Book`](super::Book) and replaced with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Author {
    pub firstname: String,
    pub lastname: String,
}

impl Author {
    pub fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}
