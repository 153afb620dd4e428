use std::fmt;

use phf::{Map, phf_map};

/// A test the robot can make before an `IF` or `WHILE` body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    NextIsEmpty,
    NextIsNotEmpty,
    NextIsEnemy,
    NextIsNotEnemy,
    NextIsFriend,
    NextIsNotFriend,
    NextIsWall,
    NextIsNotWall,
    Random,
    True,
}

const KEYWORD_TO_CONDITION: Map<&'static str, Condition> = phf_map! {
    "next-is-empty" => Condition::NextIsEmpty,
    "next-is-not-empty" => Condition::NextIsNotEmpty,
    "next-is-enemy" => Condition::NextIsEnemy,
    "next-is-not-enemy" => Condition::NextIsNotEnemy,
    "next-is-friend" => Condition::NextIsFriend,
    "next-is-not-friend" => Condition::NextIsNotFriend,
    "next-is-wall" => Condition::NextIsWall,
    "next-is-not-wall" => Condition::NextIsNotWall,
    "random" => Condition::Random,
    "true" => Condition::True,
};

impl Condition {
    /// Resolve a condition keyword. `None` for anything outside the ten
    /// recognised keywords.
    pub fn from_keyword(keyword: &str) -> Option<Condition> {
        KEYWORD_TO_CONDITION.get(keyword).copied()
    }

    /// The source keyword for this condition.
    pub fn keyword(self) -> &'static str {
        match self {
            Condition::NextIsEmpty => "next-is-empty",
            Condition::NextIsNotEmpty => "next-is-not-empty",
            Condition::NextIsEnemy => "next-is-enemy",
            Condition::NextIsNotEnemy => "next-is-not-enemy",
            Condition::NextIsFriend => "next-is-friend",
            Condition::NextIsNotFriend => "next-is-not-friend",
            Condition::NextIsWall => "next-is-wall",
            Condition::NextIsNotWall => "next-is-not-wall",
            Condition::Random => "random",
            Condition::True => "true",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
