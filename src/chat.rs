use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::{PlacementError, Result};
use crate::filter::Record;
use crate::metrics;
use crate::models::{Chat, Event, Message, MessageKind};
use crate::view::ListView;

pub const LOCAL_USER_ID: &str = "user";
pub const LOCAL_USER_NAME: &str = "You";

/// Two-pane messaging: a searchable chat list on the left and the selected
/// chat's messages on the right. Sending only appends locally.
#[derive(Debug, Clone)]
pub struct ChatHub {
    chats: ListView<Chat>,
    logs: BTreeMap<String, Vec<Message>>,
}

impl ChatHub {
    pub fn new(chats: Vec<Chat>, logs: BTreeMap<String, Vec<Message>>) -> Self {
        Self {
            chats: ListView::new(chats),
            logs,
        }
    }

    pub fn view(&self) -> &ListView<Chat> {
        &self.chats
    }

    pub fn view_mut(&mut self) -> &mut ListView<Chat> {
        &mut self.chats
    }

    pub fn messages(&self, chat_id: &str) -> &[Message] {
        self.logs.get(chat_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Messages of the selected chat; empty when nothing is selected.
    pub fn active_messages(&self) -> &[Message] {
        match self.chats.selection().id() {
            Some(id) => self.messages(id),
            None => &[],
        }
    }

    /// Most recent message: the newest local append if any, otherwise the
    /// chat's own preview.
    pub fn last_message(&self, chat_id: &str) -> Option<&Message> {
        self.messages(chat_id).last().or_else(|| {
            self.chats
                .catalog()
                .iter()
                .find(|c| c.id() == chat_id)
                .and_then(|c| c.last_message.as_ref())
        })
    }

    pub fn append(&mut self, chat_id: &str, content: &str) -> Result<&Message> {
        self.append_at(chat_id, content, Utc::now())
    }

    pub fn append_at(
        &mut self,
        chat_id: &str,
        content: &str,
        at: DateTime<Utc>,
    ) -> Result<&Message> {
        if !self.chats.catalog().iter().any(|c| c.id() == chat_id) {
            return Err(PlacementError::UnknownChat(chat_id.to_string()));
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(PlacementError::EmptyMessage);
        }

        let message = Message {
            id: Uuid::new_v4().to_string(),
            sender_id: LOCAL_USER_ID.to_string(),
            sender_name: LOCAL_USER_NAME.to_string(),
            content: content.to_string(),
            timestamp: at,
            kind: MessageKind::Text,
        };
        debug!(chat = chat_id, id = %message.id, "message appended");

        let log = self.logs.entry(chat_id.to_string()).or_default();
        log.push(message);
        Ok(&log[log.len() - 1])
    }

    pub fn unread_total(&self) -> u32 {
        metrics::sum(self.chats.catalog(), |c| c.unread_count as f64) as u32
    }
}

/// Events dated strictly after `now`, catalog order.
pub fn upcoming(events: &[Event], now: DateTime<Utc>) -> Vec<&Event> {
    events.iter().filter(|e| e.date > now).collect()
}

pub fn live(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|e| e.live).collect()
}

/// Seat fill for events with a cap, 0 for uncapped ones.
pub fn fill_percentage(event: &Event) -> u32 {
    match event.max_participants {
        Some(max) => metrics::percentage(event.participants as f64, max as f64),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, CatalogSource};
    use chrono::TimeZone;

    fn hub() -> ChatHub {
        let catalog = BundledCatalog.load().unwrap();
        ChatHub::new(catalog.chats, catalog.messages)
    }

    #[test]
    fn append_adds_message_with_fresh_id() {
        let mut hub = hub();
        let before: Vec<String> = hub.messages("1").iter().map(|m| m.id.clone()).collect();
        assert_eq!(before.len(), 4);

        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let sent = hub.append_at("1", "hello", at).unwrap().clone();

        let after = hub.messages("1");
        assert_eq!(after.len(), 5);
        let last = after.last().unwrap();
        assert_eq!(last.content, "hello");
        assert_eq!(last.id, sent.id);
        assert_eq!(last.timestamp, at);
        assert_eq!(last.sender_id, LOCAL_USER_ID);
        assert!(!before.contains(&last.id));
    }

    #[test]
    fn append_to_empty_chat_starts_log() {
        let mut hub = hub();
        assert!(hub.messages("3").is_empty());
        hub.append("3", "  Sounds good  ").unwrap();
        assert_eq!(hub.messages("3").len(), 1);
        assert_eq!(hub.last_message("3").unwrap().content, "Sounds good");
    }

    #[test]
    fn append_rejects_unknown_chat_and_blank_content() {
        let mut hub = hub();
        assert!(matches!(hub.append("42", "hi"), Err(PlacementError::UnknownChat(_))));
        assert!(matches!(hub.append("1", "   "), Err(PlacementError::EmptyMessage)));
        assert_eq!(hub.messages("1").len(), 4);
    }

    #[test]
    fn active_messages_follow_selection() {
        let mut hub = hub();
        assert_eq!(hub.active_messages().len(), 4);
        hub.view_mut().select("2");
        assert!(hub.active_messages().is_empty());
        hub.view_mut().clear();
        assert!(hub.active_messages().is_empty());
    }

    #[test]
    fn chat_search_matches_last_message() {
        let mut hub = hub();
        hub.view_mut().set_query("JOB FAIR");
        let ids: Vec<&str> = hub.view().filtered().into_iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn unread_total_sums_catalog() {
        assert_eq!(hub().unread_total(), 7);
    }

    #[test]
    fn event_windows() {
        let mut events = BundledCatalog.load().unwrap().events;
        let now = Utc.with_ymd_and_hms(2026, 10, 20, 18, 0, 0).unwrap();
        let ids: Vec<&str> = upcoming(&events, now).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert!(live(&events).is_empty());

        events[1].live = true;
        assert_eq!(live(&events).len(), 1);
        assert_eq!(fill_percentage(&events[1]), 89);
        assert_eq!(fill_percentage(&events[2]), 0);
    }
}
