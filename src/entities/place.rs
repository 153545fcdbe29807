use serde::{Deserialize, Serialize};

/// A user-saved address. The id is assigned by the store and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub address: String,
}
