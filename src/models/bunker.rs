use super::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BunkerRecord {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub shift: String,      // Morning / Evening / Night
}

impl Record for BunkerRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
