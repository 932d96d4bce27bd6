//! Test doubles shared by the in-module tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::traits::ChatProvider;

/// Chat provider that records everything the bot says.
#[derive(Clone)]
pub struct MockChat {
    room: String,
    sent: Arc<Mutex<Vec<String>>>,
}

impl MockChat {
    pub fn new(room: &str) -> Self {
        Self {
            room: room.to_string(),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> String {
        self.messages().last().cloned().unwrap_or_default()
    }

    pub fn said(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<(), String> {
        self.sent.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn room_id(&self) -> String {
        self.room.clone()
    }
}
