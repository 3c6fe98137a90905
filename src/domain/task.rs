use crate::domain::column::Column;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a task, assigned once at creation.
///
/// New tasks get a random UUID. Boards saved by the browser app use
/// millisecond timestamps, which are kept as numbers so they are written
/// back exactly as they were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Numeric(u64),
    Uuid(Uuid),
}

impl TaskId {
    /// Generates a fresh random id
    pub fn generate() -> Self {
        Self::Uuid(Uuid::new_v4())
    }
}

impl FromStr for TaskId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u64>() {
            return Ok(Self::Numeric(number));
        }
        Uuid::parse_str(trimmed)
            .map(Self::Uuid)
            .map_err(|_| crate::error::KanbanError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(number) => write!(f, "{}", number),
            Self::Uuid(uuid) => write!(f, "{}", uuid),
        }
    }
}

/// A field that must hold non-blank text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Description,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::Description => write!(f, "Description"),
        }
    }
}

/// Checks that title and description are non-empty after trimming
pub fn validate_fields(title: &str, description: &str) -> Result<(), crate::error::KanbanError> {
    if title.trim().is_empty() {
        return Err(crate::error::KanbanError::Validation(RequiredField::Title));
    }
    if description.trim().is_empty() {
        return Err(crate::error::KanbanError::Validation(
            RequiredField::Description,
        ));
    }
    Ok(())
}

/// Everything needed to create a task, before an id and timestamp exist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub status: Option<Column>,
    pub restrict_backflow: Option<bool>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_status(mut self, status: Column) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_restrict_backflow(mut self, restrict: bool) -> Self {
        self.restrict_backflow = Some(restrict);
        self
    }
}

/// A card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    #[serde(default, with = "due_date_format")]
    pub due_date: Option<NaiveDate>,
    /// Opaque attachment handle, never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: Column,
    #[serde(default)]
    pub restrict_backflow: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from a draft, assigning a fresh id and creation time.
    ///
    /// Fails with a validation error if the title or description is blank.
    pub fn create(draft: NewTask) -> Result<Self, crate::error::KanbanError> {
        validate_fields(&draft.title, &draft.description)?;

        Ok(Self {
            id: TaskId::generate(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            image: draft.image,
            status: draft.status.unwrap_or_default(),
            restrict_backflow: draft.restrict_backflow.unwrap_or(false),
            created_at: Utc::now(),
        })
    }

    /// Checks that the editable text fields are still filled in
    pub fn validate(&self) -> Result<(), crate::error::KanbanError> {
        validate_fields(&self.title, &self.description)
    }

    /// A task is overdue when its due date lies before `today` and it is not done
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && self.status != Column::Done,
            None => false,
        }
    }

    /// Case-insensitive substring match on title or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// `dueDate` is stored as `YYYY-MM-DD`, with an empty string for "no due date".
/// Reading also accepts `null`, a missing key, or a full RFC 3339 timestamp.
mod due_date_format {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| Some(timestamp.date_naive()))
            .map_err(|_| D::Error::custom(format!("invalid due date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_applies_defaults() {
        let task = Task::create(NewTask::new("Write spec", "Draft the doc")).unwrap();

        assert_eq!(task.title, "Write spec");
        assert_eq!(task.description, "Draft the doc");
        assert_eq!(task.status, Column::ToDo);
        assert!(!task.restrict_backflow);
        assert!(task.due_date.is_none());
        assert!(task.image.is_none());
    }

    #[test]
    fn test_create_keeps_supplied_fields() {
        let draft = NewTask::new("Ship", "Release build")
            .with_due_date(date(2026, 3, 1))
            .with_image("blob:preview/1")
            .with_status(Column::Testing)
            .with_restrict_backflow(true);

        let task = Task::create(draft).unwrap();

        assert_eq!(task.due_date, Some(date(2026, 3, 1)));
        assert_eq!(task.image.as_deref(), Some("blob:preview/1"));
        assert_eq!(task.status, Column::Testing);
        assert!(task.restrict_backflow);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let err = Task::create(NewTask::new("   ", "Something")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::KanbanError::Validation(RequiredField::Title)
        ));

        let err = Task::create(NewTask::new("Title", "\n\t")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::KanbanError::Validation(RequiredField::Description)
        ));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::create(NewTask::new("A", "a")).unwrap();
        let b = Task::create(NewTask::new("B", "b")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_id_parsing() {
        let id = TaskId::generate();
        let parsed = TaskId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        let parsed = TaskId::from_str("1730000000000").unwrap();
        assert_eq!(parsed, TaskId::Numeric(1_730_000_000_000));
        assert_eq!(parsed.to_string(), "1730000000000");

        assert!(TaskId::from_str("HLA1").is_err());
        assert!(TaskId::from_str("-5").is_err());
        assert!(TaskId::from_str("").is_err());
    }

    #[test]
    fn test_task_id_keeps_its_encoding() {
        let numeric: TaskId = serde_json::from_str("1730000000000").unwrap();
        assert_eq!(numeric, TaskId::Numeric(1_730_000_000_000));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "1730000000000");

        let raw = "\"6f1c1c4e-2b7a-4c56-9a39-0b6f6c2d9b11\"";
        let uuid: TaskId = serde_json::from_str(raw).unwrap();
        assert!(matches!(uuid, TaskId::Uuid(_)));
        assert_eq!(serde_json::to_string(&uuid).unwrap(), raw);

        assert!(serde_json::from_str::<TaskId>("\"HLA1\"").is_err());
        assert!(serde_json::from_str::<TaskId>("1.5").is_err());
    }

    #[test]
    fn test_is_overdue() {
        let today = date(2026, 10, 17);
        let mut task = Task::create(NewTask::new("Pay", "Invoices")).unwrap();
        assert!(!task.is_overdue(today));

        task.due_date = Some(date(2026, 10, 16));
        assert!(task.is_overdue(today));

        task.due_date = Some(today);
        assert!(!task.is_overdue(today));

        task.due_date = Some(date(2026, 1, 1));
        task.status = Column::Done;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let task = Task::create(NewTask::new("Fix bug", "Crash on LOGIN")).unwrap();
        assert!(task.matches("fix"));
        assert!(task.matches("login"));
        assert!(task.matches("BUG"));
        assert!(!task.matches("report"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let task = Task::create(
            NewTask::new("Write spec", "Draft the doc").with_restrict_backflow(true),
        )
        .unwrap();
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["status"], "To Do");
        assert_eq!(json["dueDate"], "");
        assert_eq!(json["restrictBackflow"], true);
        assert!(json.get("createdAt").is_some());
        // Absent attachments are left out entirely
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_serialization_with_due_date() {
        let task = Task::create(NewTask::new("A", "B").with_due_date(date(2026, 2, 28))).unwrap();

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"dueDate\":\"2026-02-28\""));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }

    #[test]
    fn test_lenient_due_date_deserialization() {
        let record = |due: &str| {
            format!(
                r#"{{
                "id": "6f1c1c4e-2b7a-4c56-9a39-0b6f6c2d9b11",
                "title": "Old task",
                "description": "Saved by the browser",
                {}
                "status": "In Progress",
                "createdAt": "2024-01-01T00:00:00Z"
            }}"#,
                due
            )
        };

        let task: Task = serde_json::from_str(&record("")).unwrap();
        assert!(task.due_date.is_none());
        assert!(!task.restrict_backflow);

        let task: Task = serde_json::from_str(&record(r#""dueDate": null,"#)).unwrap();
        assert!(task.due_date.is_none());

        let task: Task = serde_json::from_str(&record(r#""dueDate": "","#)).unwrap();
        assert!(task.due_date.is_none());

        let task: Task =
            serde_json::from_str(&record(r#""dueDate": "2024-05-01T10:00:00Z","#)).unwrap();
        assert_eq!(task.due_date, Some(date(2024, 5, 1)));

        assert!(serde_json::from_str::<Task>(&record(r#""dueDate": "soon","#)).is_err());
    }
}
