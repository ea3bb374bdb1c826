//! Offline action queue records.

use serde::{Deserialize, Serialize};

/// Sync status of a queued action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

impl SyncStatus {
    pub fn label(self) -> &'static str {
        match self {
            SyncStatus::Pending => "pending",
            SyncStatus::Synced => "synced",
            SyncStatus::Failed => "failed",
        }
    }
}

/// An action taken while disconnected, awaiting simulated synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: String,
    /// Category tag: "irrigation", "crop" or "schedule"
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub status: SyncStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl QueueItem {
    /// Human-readable description of the queued action.
    pub fn label(&self) -> String {
        match self.kind.as_str() {
            "irrigation" => match self.action.as_str() {
                "start" => "Start Irrigation".to_string(),
                "stop" => "Stop Irrigation".to_string(),
                _ => "Auto Mode".to_string(),
            },
            "crop" => "Save Leaf Scan".to_string(),
            "schedule" => "Set Schedule".to_string(),
            _ => self.action.clone(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SyncStatus::Pending
    }
}

/// Caller-supplied part of a queue item; id, timestamp and status are
/// assigned by the connectivity holder.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQueueItem {
    pub kind: String,
    pub action: String,
    pub data: Option<serde_json::Value>,
}

impl NewQueueItem {
    pub fn new(kind: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            action: action.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Totals per status, for the sync screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueCounts {
    pub pending: usize,
    pub synced: usize,
    pub failed: usize,
}

impl QueueCounts {
    pub fn from_items(items: &[QueueItem]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            match item.status {
                SyncStatus::Pending => counts.pending += 1,
                SyncStatus::Synced => counts.synced += 1,
                SyncStatus::Failed => counts.failed += 1,
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(kind: &str, action: &str, status: SyncStatus) -> QueueItem {
        QueueItem {
            id: "1".to_string(),
            kind: kind.to_string(),
            action: action.to_string(),
            timestamp: 0,
            status,
            data: None,
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(item("irrigation", "start", SyncStatus::Pending).label(), "Start Irrigation");
        assert_eq!(item("irrigation", "stop", SyncStatus::Pending).label(), "Stop Irrigation");
        assert_eq!(item("irrigation", "auto", SyncStatus::Pending).label(), "Auto Mode");
        assert_eq!(item("crop", "save-scan", SyncStatus::Pending).label(), "Save Leaf Scan");
        assert_eq!(item("schedule", "set", SyncStatus::Pending).label(), "Set Schedule");
        assert_eq!(item("other", "reboot", SyncStatus::Pending).label(), "reboot");
    }

    #[test]
    fn test_wire_format_uses_type_and_lowercase_status() {
        let mut queued = item("schedule", "set", SyncStatus::Failed);
        queued.data = Some(json!({"time": "06:00"}));
        let value = serde_json::to_value(&queued).unwrap();
        assert_eq!(value["type"], "schedule");
        assert_eq!(value["status"], "failed");
        assert_eq!(value["data"]["time"], "06:00");
    }

    #[test]
    fn test_missing_data_deserializes_as_none() {
        let raw = r#"{"id":"5","type":"crop","action":"save-scan","timestamp":12,"status":"synced"}"#;
        let parsed: QueueItem = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.status, SyncStatus::Synced);
    }

    #[test]
    fn test_counts() {
        let items = vec![
            item("crop", "a", SyncStatus::Pending),
            item("crop", "b", SyncStatus::Pending),
            item("crop", "c", SyncStatus::Failed),
            item("crop", "d", SyncStatus::Synced),
        ];
        let counts = QueueCounts::from_items(&items);
        assert_eq!(counts, QueueCounts { pending: 2, synced: 1, failed: 1 });
    }
}
