//! JSONL transcript writer.
//!
//! Each [`ConversationEvent`] becomes one JSON object per line: the event
//! payload's fields plus `type` and `timestamp`. Files are opened in append
//! mode so one transcript can span several CLI sessions.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use switchboard_application::{ConversationEvent, ConversationLogger};
use tracing::warn;

/// Transcript logger writing one JSON object per line.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flatten an event into its transcript record.
fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert("timestamp".to_string(), Value::from(timestamp));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, timestamp);

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        // flushed per line
        if let Err(e) = serde_json::to_writer(&mut *writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
        {
            warn!("Could not write transcript {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "question_routed",
            serde_json::json!({"question": "What is Rust?", "category": "technical"}),
        ));
        logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({"answer": {"content": {"main_answer": "A language"}}}),
        ));

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "question_routed");
        assert_eq!(records[0]["category"], "technical");
        assert!(records[0]["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(records[1]["answer"]["content"]["main_answer"], "A language");
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        for n in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("answer", serde_json::json!({"n": n})));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["n"], 1);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let record = to_record(
            ConversationEvent::new("answer_failed", Value::from("timeout")),
            "2026-01-01T00:00:00.000Z".to_string(),
        );
        assert_eq!(record["type"], "answer_failed");
        assert_eq!(record["data"], "timeout");
        assert_eq!(record["timestamp"], "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlConversationLogger::open(blocker.join("log.jsonl")).is_err());
    }
}
