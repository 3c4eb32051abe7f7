//! Wire model for the hosted database's realtime channel.
//!
//! The service speaks phoenix-framed JSON over a websocket: the client joins
//! a topic with a `postgres_changes` subscription, answers idle periods with
//! heartbeats, and receives one frame per row-level change. Only the
//! dispatch decision lives here; the socket itself is owned by the frontend.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One phoenix frame, either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketMessage {
    pub topic: String,
    pub event: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(rename = "ref", default)]
    pub message_ref: Option<String>,
}

/// Row-level change kinds the subscription can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Insert,
    Update,
    Delete,
}

impl ChangeType {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "INSERT" => Some(ChangeType::Insert),
            "UPDATE" => Some(ChangeType::Update),
            "DELETE" => Some(ChangeType::Delete),
            _ => None,
        }
    }
}

/// A change notification for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub change: ChangeType,
    pub table: String,
}

/// Topic string for a table subscription.
pub fn topic_for(table: &str) -> String {
    format!("realtime:public:{table}")
}

/// Join frame subscribing to every change on `table`, optionally narrowed by
/// a `column=eq.value` filter.
pub fn join_frame(table: &str, filter: Option<&str>, message_ref: &str) -> SocketMessage {
    let mut change = json!({
        "event": "*",
        "schema": "public",
        "table": table,
    });
    if let Some(filter) = filter {
        change["filter"] = Value::String(filter.to_string());
    }
    SocketMessage {
        topic: topic_for(table),
        event: "phx_join".to_string(),
        payload: json!({ "config": { "postgres_changes": [change] } }),
        message_ref: Some(message_ref.to_string()),
    }
}

/// Keep-alive frame expected by the server on idle connections.
pub fn heartbeat_frame(message_ref: &str) -> SocketMessage {
    SocketMessage {
        topic: "phoenix".to_string(),
        event: "heartbeat".to_string(),
        payload: json!({}),
        message_ref: Some(message_ref.to_string()),
    }
}

/// Extracts the row-level change a frame describes, if any. Replies such as
/// `phx_reply` and heartbeat acks yield `None`.
pub fn change_event(message: &SocketMessage) -> Option<ChangeEvent> {
    if message.event != "postgres_changes" {
        return None;
    }
    let data = message.payload.get("data")?;
    let change = ChangeType::parse(data.get("type")?.as_str()?)?;
    let table = data.get("table")?.as_str()?.to_string();
    Some(ChangeEvent { change, table })
}

/// Whether a frame should trigger a refetch of the collection subscribed to
/// `table`: any insert, update, or delete on that table qualifies.
pub fn refetch_trigger(message: &SocketMessage, table: &str) -> bool {
    change_event(message).is_some_and(|event| event.table == table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change_frame(kind: &str, table: &str) -> SocketMessage {
        SocketMessage {
            topic: topic_for(table),
            event: "postgres_changes".to_string(),
            payload: json!({
                "ids": [1],
                "data": {
                    "type": kind,
                    "table": table,
                    "schema": "public",
                    "record": { "id": "r1" },
                    "commit_timestamp": "2024-01-01T00:00:00Z"
                }
            }),
            message_ref: None,
        }
    }

    #[test]
    fn join_frame_carries_the_subscription_config() {
        let frame = join_frame("reviews", Some("firm_id=eq.f1"), "1");
        assert_eq!(frame.topic, "realtime:public:reviews");
        assert_eq!(frame.event, "phx_join");
        let change = &frame.payload["config"]["postgres_changes"][0];
        assert_eq!(change["table"], "reviews");
        assert_eq!(change["event"], "*");
        assert_eq!(change["filter"], "firm_id=eq.f1");
    }

    #[test]
    fn join_frame_without_filter_omits_it() {
        let frame = join_frame("prop_firms", None, "2");
        let change = &frame.payload["config"]["postgres_changes"][0];
        assert!(change.get("filter").is_none());
    }

    #[test]
    fn frames_round_trip_through_serde() {
        let frame = heartbeat_frame("7");
        let text = serde_json::to_string(&frame).unwrap();
        let back: SocketMessage = serde_json::from_str(&text).unwrap();
        assert_eq!(back.event, "heartbeat");
        assert_eq!(back.message_ref.as_deref(), Some("7"));
    }

    #[test]
    fn insert_update_delete_all_trigger_a_refetch() {
        for kind in ["INSERT", "UPDATE", "DELETE"] {
            let frame = change_frame(kind, "reviews");
            assert!(refetch_trigger(&frame, "reviews"), "{kind} should trigger");
        }
    }

    #[test]
    fn changes_on_other_tables_are_ignored() {
        let frame = change_frame("INSERT", "prop_firms");
        assert!(!refetch_trigger(&frame, "reviews"));
    }

    #[test]
    fn replies_and_heartbeat_acks_do_not_trigger() {
        let reply = SocketMessage {
            topic: topic_for("reviews"),
            event: "phx_reply".to_string(),
            payload: json!({ "status": "ok", "response": {} }),
            message_ref: Some("1".to_string()),
        };
        assert!(!refetch_trigger(&reply, "reviews"));
        assert!(change_event(&reply).is_none());
    }

    #[test]
    fn change_event_exposes_kind_and_table() {
        let event = change_event(&change_frame("UPDATE", "prop_firms")).unwrap();
        assert_eq!(event.change, ChangeType::Update);
        assert_eq!(event.table, "prop_firms");
    }
}
