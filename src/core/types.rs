//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// The five mini-games of the arcade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Math,
    Recall,
    Pattern,
    Anagram,
    Puzzle,
}

impl GameKind {
    pub const ALL: [GameKind; 5] = [
        GameKind::Math,
        GameKind::Recall,
        GameKind::Pattern,
        GameKind::Anagram,
        GameKind::Puzzle,
    ];

    /// Stable lowercase form, used as persisted map keys
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Math => "math",
            GameKind::Recall => "recall",
            GameKind::Pattern => "pattern",
            GameKind::Anagram => "anagram",
            GameKind::Puzzle => "puzzle",
        }
    }

    /// Parse a persisted tag. Unknown tags yield `None` rather than an error
    /// so malformed records can be routed to a fallback bucket.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "math" => Some(GameKind::Math),
            "recall" => Some(GameKind::Recall),
            "pattern" => Some(GameKind::Pattern),
            "anagram" => Some(GameKind::Anagram),
            "puzzle" => Some(GameKind::Puzzle),
            _ => None,
        }
    }
}
