use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// UI theme, two variants only. Defaults to dark when nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// A single recorded clipboard snapshot.
///
/// Immutable once created: the store only prepends, removes by id, or
/// clears. `char_count` always equals `content.chars().count()`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HistoryItem {
    pub id: String,
    pub content: String,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
    pub char_count: usize,
    /// True if the original clipboard content exceeded the character cap.
    pub is_truncated: bool,
}

impl HistoryItem {
    /// Create a new item with a fresh id and the current wall-clock time.
    /// `content` must already be normalized (trimmed, possibly truncated).
    pub fn new(content: String, is_truncated: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            char_count: content.chars().count(),
            content,
            timestamp: Utc::now(),
            is_truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_item_char_count_matches_content() {
        let item = HistoryItem::new("héllo".to_string(), false);
        assert_eq!(item.char_count, 5);
        assert!(!item.is_truncated);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = HistoryItem::new("x".to_string(), false);
        let b = HistoryItem::new("x".to_string(), false);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = HistoryItem::new("abc".to_string(), false);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("charCount").is_some());
        assert!(json.get("isTruncated").is_some());
        assert_eq!(json["charCount"], 3);
    }
}
