use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A column on the board. Declaration order is board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Done")]
    Done,
}

impl Column {
    /// Every column, left to right
    pub const ALL: [Column; 4] = [
        Column::ToDo,
        Column::InProgress,
        Column::Testing,
        Column::Done,
    ];

    /// The column new tasks land in unless told otherwise
    pub const fn first() -> Self {
        Column::ToDo
    }

    /// Position of the column on the board, starting at 0
    pub const fn ordinal(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Testing => 2,
            Self::Done => 3,
        }
    }

    /// Display name, also used as the persisted status value
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Testing => "Testing",
            Self::Done => "Done",
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Column {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Column::ALL
            .into_iter()
            .find(|col| col.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| crate::error::KanbanError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_board_order() {
        for (index, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.ordinal(), index);
        }
        assert!(Column::ToDo < Column::InProgress);
        assert!(Column::Testing < Column::Done);
    }

    #[test]
    fn test_default_is_first_column() {
        assert_eq!(Column::default(), Column::ToDo);
    }

    #[test]
    fn test_column_parsing() {
        assert_eq!(Column::from_str("To Do").unwrap(), Column::ToDo);
        assert_eq!(Column::from_str("in progress").unwrap(), Column::InProgress);
        assert_eq!(Column::from_str(" TESTING ").unwrap(), Column::Testing);
        assert!(Column::from_str("Review").is_err());
        assert!(Column::from_str("").is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Column::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let column: Column = serde_json::from_str("\"Done\"").unwrap();
        assert_eq!(column, Column::Done);

        assert!(serde_json::from_str::<Column>("\"Backlog\"").is_err());
    }
}
