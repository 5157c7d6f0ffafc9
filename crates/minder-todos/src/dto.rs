use super::*;
use minder_core::Unique;

#[derive(Debug, serde::Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Title as it will be stored. Validation and the write both go
    /// through here so a padded title cannot pass one and skip the other.
    pub fn title(&self) -> &str {
        self.title.trim()
    }
}

/// Presence-aware partial update.
///
/// `None` means the field was absent from the request and keeps its
/// stored value; `Some(false)` and `Some("")` are real writes. This is
/// what distinguishes "leave completed alone" from "mark it incomplete".
#[derive(Debug, Default, serde::Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
    /// Normalizes the patch for storage: present titles are trimmed,
    /// absent fields stay absent.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            completed: self.completed,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct TodoInfo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub owner_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Todo> for TodoInfo {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().to_string(),
            title: todo.title().to_string(),
            completed: todo.completed(),
            owner_id: todo.owner().to_string(),
            created_at: todo.created(),
            updated_at: todo.updated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_none() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
        assert_eq!(patch.title, None);
        assert_eq!(patch.completed, None);
    }

    #[test]
    fn explicit_false_is_a_write() {
        let patch: TodoPatch = serde_json::from_str(r#"{"completed": false}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.completed, Some(false));
        assert_eq!(patch.title, None);
    }

    #[test]
    fn partial_patch_leaves_other_field_alone() {
        let patch: TodoPatch = serde_json::from_str(r#"{"title": "renamed"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("renamed"));
        assert_eq!(patch.completed, None);
    }

    #[test]
    fn create_defaults_to_incomplete() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": "laundry"}"#).unwrap();
        assert!(!req.completed);
    }

    #[test]
    fn create_title_is_trimmed_for_storage() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": "  laundry "}"#).unwrap();
        assert_eq!(req.title(), "laundry");
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": "   "}"#).unwrap();
        assert_eq!(req.title(), "");
    }

    #[test]
    fn trimmed_patch_keeps_absence_distinct() {
        let patch: TodoPatch = serde_json::from_str(r#"{"title": "  renamed "}"#).unwrap();
        let patch = patch.trimmed();
        assert_eq!(patch.title.as_deref(), Some("renamed"));
        assert_eq!(patch.completed, None);
        let patch: TodoPatch = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        let patch = patch.trimmed();
        assert_eq!(patch.title, None);
        assert_eq!(patch.completed, Some(true));
    }
}
