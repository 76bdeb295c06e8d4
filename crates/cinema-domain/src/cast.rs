//! Roles a person can hold on a film.

use serde::{Deserialize, Serialize};

/// Cast type of a film/person association, also used as the job type id.
///
/// Stored as an integer tag: 1 = director, 2 = actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CastType {
    Director,
    Actor,
}

impl CastType {
    pub const ALL: [CastType; 2] = [CastType::Director, CastType::Actor];

    pub fn id(self) -> i32 {
        match self {
            Self::Director => 1,
            Self::Actor => 2,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Director),
            2 => Some(Self::Actor),
            _ => None,
        }
    }

    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "director" => Some(Self::Director),
            "actor" => Some(Self::Actor),
            _ => None,
        }
    }
}
