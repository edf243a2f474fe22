use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Workflow state of a shopping list.
///
/// Stored as plain text in SQLite; the store never enforces the set, the
/// typed enum does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListStatus {
    #[serde(rename = "to-shop")]
    ToShop,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl ListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToShop => "to-shop",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-shop" => Ok(Self::ToShop),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseError::Status(other.to_string())),
        }
    }
}

/// Urgency label attached to a list at creation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(ParseError::Priority(other.to_string())),
        }
    }
}

/// Client-side subset selector applied to the cached lists.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListFilter {
    #[default]
    #[serde(rename = "All Lists")]
    AllLists,
    #[serde(rename = "to-shop")]
    ToShop,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl ListFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllLists => "All Lists",
            Self::ToShop => "to-shop",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Whether a list with the given status falls inside this filter.
    pub fn matches(&self, status: ListStatus) -> bool {
        match self {
            Self::AllLists => true,
            Self::ToShop => status == ListStatus::ToShop,
            Self::InProgress => status == ListStatus::InProgress,
            Self::Done => status == ListStatus::Done,
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All Lists" => Ok(Self::AllLists),
            "to-shop" => Ok(Self::ToShop),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseError::Filter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in [ListStatus::ToShop, ListStatus::InProgress, ListStatus::Done] {
            assert_eq!(status.as_str().parse::<ListStatus>().unwrap(), status);
        }
    }

    #[test]
    fn priority_round_trip() {
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("shopping".parse::<ListStatus>().is_err());
    }

    #[test]
    fn all_lists_matches_everything() {
        for status in [ListStatus::ToShop, ListStatus::InProgress, ListStatus::Done] {
            assert!(ListFilter::AllLists.matches(status));
        }
    }

    #[test]
    fn done_filter_matches_only_done() {
        assert!(ListFilter::Done.matches(ListStatus::Done));
        assert!(!ListFilter::Done.matches(ListStatus::ToShop));
        assert!(!ListFilter::Done.matches(ListStatus::InProgress));
    }
}
