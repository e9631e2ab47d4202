//! Snapshots of the external feeds the planner consumed.
//!
//! The planner does not read these feeds here; a dump only asks each one to
//! persist its latest message so a cycle can be reproduced offline.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::DiagnosticsConfig;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("dump '{topic}': {source}")]
    Io {
        topic: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize '{topic}': {source}")]
    Serialize {
        topic: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A data feed that can persist its most recent message.
pub trait MessageFeed {
    fn topic(&self) -> &str;

    fn dump_latest_message(&self) -> Result<(), DiagnosticsError>;
}

/// The feeds a planning cycle depends on.
pub struct FeedSet<'a> {
    pub localization: &'a dyn MessageFeed,
    pub chassis: &'a dyn MessageFeed,
    pub routing_response: &'a dyn MessageFeed,
    pub prediction: Option<&'a dyn MessageFeed>,
}

/// Dump localization, chassis and routing response, plus prediction when
/// `enable_prediction` is set. A failing feed is logged and skipped.
///
/// Returns how many feeds dumped successfully.
pub fn dump_planning_context(feeds: &FeedSet<'_>, config: &DiagnosticsConfig) -> usize {
    let mut targets = vec![feeds.localization, feeds.chassis, feeds.routing_response];
    if config.enable_prediction {
        match feeds.prediction {
            Some(prediction) => targets.push(prediction),
            None => warn!("prediction dump enabled but no prediction feed was provided"),
        }
    }

    targets
        .into_iter()
        .filter(|feed| match feed.dump_latest_message() {
            Ok(()) => {
                debug!("dumped latest '{}' message", feed.topic());
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        })
        .count()
}

/// Feed that keeps the latest message as JSON and writes it to
/// `<dump_dir>/<topic>.json` on dump.
#[derive(Clone, Debug)]
pub struct JsonSnapshotFeed {
    topic: String,
    dump_dir: PathBuf,
    latest: Option<serde_json::Value>,
}

impl JsonSnapshotFeed {
    pub fn new(topic: impl Into<String>, dump_dir: impl Into<PathBuf>) -> Self {
        Self {
            topic: topic.into(),
            dump_dir: dump_dir.into(),
            latest: None,
        }
    }

    /// Feed writing into the configured dump directory.
    pub fn from_config(topic: impl Into<String>, config: &DiagnosticsConfig) -> Self {
        Self::new(topic, config.dump_dir.clone())
    }

    /// Replace the latest message.
    pub fn publish<T: Serialize>(&mut self, message: &T) -> Result<(), DiagnosticsError> {
        let value = serde_json::to_value(message).map_err(|source| DiagnosticsError::Serialize {
            topic: self.topic.clone(),
            source,
        })?;
        self.latest = Some(value);
        Ok(())
    }

    pub fn latest(&self) -> Option<&serde_json::Value> {
        self.latest.as_ref()
    }

    /// Output file; slashes in the topic become underscores.
    pub fn dump_path(&self) -> PathBuf {
        let name = self.topic.trim_start_matches('/').replace('/', "_");
        self.dump_dir.join(format!("{name}.json"))
    }

    fn io_error(&self, source: std::io::Error) -> DiagnosticsError {
        DiagnosticsError::Io {
            topic: self.topic.clone(),
            source,
        }
    }
}

impl MessageFeed for JsonSnapshotFeed {
    fn topic(&self) -> &str {
        &self.topic
    }

    /// No-op until a message has been published.
    fn dump_latest_message(&self) -> Result<(), DiagnosticsError> {
        let Some(message) = &self.latest else {
            return Ok(());
        };
        fs::create_dir_all(&self.dump_dir).map_err(|e| self.io_error(e))?;
        let file = File::create(self.dump_path()).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, message).map_err(|source| {
            DiagnosticsError::Serialize {
                topic: self.topic.clone(),
                source,
            }
        })?;
        // Small snapshots stay buffered until here; surface the write error.
        writer.flush().map_err(|e| self.io_error(e))
    }
}
