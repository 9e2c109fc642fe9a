//! Notice broadcasting

use super::types::{Notice, NoticeSeverity};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

const DEFAULT_CAPACITY: usize = 256;

/// Broadcasts notices to subscribers and keeps the most recent ones.
/// Every notice is also logged.
#[derive(Debug, Clone)]
pub struct NoticeBus {
    sender: broadcast::Sender<Notice>,
    recent: Arc<Mutex<VecDeque<Notice>>>,
    capacity: usize,
}

impl NoticeBus {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            recent: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish a notice. Having no subscribers is not an error.
    pub fn emit(&self, notice: Notice) {
        let category = notice.category.as_str();
        match notice.severity {
            NoticeSeverity::Info => info!(target: "notices", category, "{}", notice.message),
            NoticeSeverity::Warning => warn!(target: "notices", category, "{}", notice.message),
            NoticeSeverity::Error => error!(target: "notices", category, "{}", notice.message),
        }

        {
            let mut recent = self.recent.lock();
            if recent.len() == self.capacity {
                recent.pop_front();
            }
            recent.push_back(notice.clone());
        }

        let _ = self.sender.send(notice);
    }

    /// Most recent notices, newest first
    pub fn recent(&self, limit: usize) -> Vec<Notice> {
        self.recent.lock().iter().rev().take(limit).cloned().collect()
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
