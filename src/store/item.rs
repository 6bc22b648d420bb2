use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Store-assigned identifier of an [`Item`].
pub type ItemId = i64;

/// Processing state of an item.
///
/// Batch processing walks `New -> Processing -> Processed`. There is no
/// failed state; a task that cannot finish leaves its item untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    New,
    Processing,
    Processed,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemStatus::New => "NEW",
            ItemStatus::Processing => "PROCESSING",
            ItemStatus::Processed => "PROCESSED",
        };
        f.write_str(s)
    }
}

/// Returned when a status string matches none of the known states.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ItemStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ItemStatus::New),
            "PROCESSING" => Ok(ItemStatus::Processing),
            "PROCESSED" => Ok(ItemStatus::Processed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Domain record managed by an [`ItemStore`](super::ItemStore).
///
/// Batch processing only reads `id` and advances `status`; the remaining
/// fields are payload copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub email: String,
}

impl Item {
    /// A fresh record in `NEW` state. The store assigns the real id on
    /// create; until then it is 0.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Item {
            id: 0,
            name: name.into(),
            description: description.into(),
            status: ItemStatus::New,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_wire_strings() {
        assert_eq!(ItemStatus::New.to_string(), "NEW");
        assert_eq!(ItemStatus::Processing.to_string(), "PROCESSING");
        assert_eq!(ItemStatus::Processed.to_string(), "PROCESSED");
    }

    #[test]
    fn status_parses_round_trip() {
        for status in [ItemStatus::New, ItemStatus::Processing, ItemStatus::Processed] {
            assert_eq!(status.to_string().parse::<ItemStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let err = "FAILED".parse::<ItemStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("FAILED".to_string()));
    }

    #[test]
    fn new_item_starts_unassigned_and_new() {
        let item = Item::new("widget", "a widget", "widget@example.com");
        assert_eq!(item.id, 0);
        assert_eq!(item.status, ItemStatus::New);
    }
}
