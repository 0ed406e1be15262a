use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftLabel {
    Morning,
    Night,
}

impl ShiftLabel {
    /// Morning from 06:00 (included) to 18:00 (excluded), Night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            ShiftLabel::Morning
        } else {
            ShiftLabel::Night
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftLabel::Morning => "Morning",
            ShiftLabel::Night => "Night",
        }
    }
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveShift {
    pub employee_name: String,
    pub image_ref: String,
    pub start_time: String, // HH:MM
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum ShiftState {
    #[default]
    Idle,
    Active(ActiveShift),
}

impl ShiftState {
    pub fn is_active(&self) -> bool {
        matches!(self, ShiftState::Active(_))
    }
}

/// What an ended shift looked like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftSummary {
    pub employee_name: String,
    pub label: ShiftLabel,
    pub start_time: String,
    pub end_time: String,
}
