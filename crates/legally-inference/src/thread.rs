//! Process-local conversation threads.
//!
//! A thread is an opaque client-supplied id owning an ordered, append-only
//! sequence of turns. History lives for the lifetime of the process and
//! grows without bound; nothing is persisted across restarts.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::message::Message;

/// In-memory map from thread id to its ordered turns.
///
/// Each append is atomic, but two requests racing on the same thread id can
/// still interleave their read/append pairs; callers get whatever order the
/// lock grants.
#[derive(Debug, Default)]
pub struct ThreadStore {
    threads: Mutex<HashMap<String, Vec<Message>>>,
}

impl ThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed question/answer exchange.
    pub fn append_exchange(&self, thread_id: &str, question: &str, answer: &str) {
        if let Ok(mut map) = self.threads.lock() {
            let turns = map.entry(thread_id.to_owned()).or_default();
            turns.push(Message::user(question));
            turns.push(Message::assistant(answer));
        }
    }

    /// The ordered turns of `thread_id`; empty for unknown ids.
    pub fn history(&self, thread_id: &str) -> Vec<Message> {
        self.threads
            .lock()
            .map(|map| map.get(thread_id).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Number of turns recorded for `thread_id`.
    pub fn turn_count(&self, thread_id: &str) -> usize {
        self.threads
            .lock()
            .map(|map| map.get(thread_id).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::message::Role;

    #[test]
    fn unknown_thread_has_empty_history() {
        let store = ThreadStore::new();
        assert!(store.history("nope").is_empty());
        assert_eq!(store.turn_count("nope"), 0);
    }

    #[test]
    fn exchanges_append_in_order() {
        let store = ThreadStore::new();
        store.append_exchange("t", "q1", "a1");
        store.append_exchange("t", "q2", "a2");

        let turns = store.history("t");
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "q1");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "a1");
        assert_eq!(turns[2].content, "q2");
        assert_eq!(turns[3].content, "a2");
    }

    #[test]
    fn threads_are_independent() {
        let store = ThreadStore::new();
        store.append_exchange("a", "q", "r");
        assert_eq!(store.turn_count("a"), 2);
        assert_eq!(store.turn_count("b"), 0);
    }
}
