use serde::{Deserialize, Serialize};

pub const NOTIFICATIONS_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub season: u32,
    pub week: u32,
    pub read: bool,
}

/// Newest-first inbox capped at `NOTIFICATIONS_LIMIT` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
        self.items.truncate(NOTIFICATIONS_LIMIT);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn unread(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u32) -> Notification {
        Notification {
            id,
            text: format!("note {}", id),
            season: 1,
            week: 1,
            read: false,
        }
    }

    #[test]
    fn test_push_keeps_newest_first_and_caps() {
        let mut inbox = Notifications::default();

        for id in 0..60 {
            inbox.push(note(id));
        }

        assert_eq!(inbox.len(), NOTIFICATIONS_LIMIT);
        assert_eq!(inbox.latest().map(|n| n.id), Some(59));
        assert_eq!(inbox.items().last().map(|n| n.id), Some(10));
    }

    #[test]
    fn test_mark_all_read() {
        let mut inbox = Notifications::default();
        inbox.push(note(1));
        inbox.push(note(2));

        assert_eq!(inbox.unread(), 2);
        inbox.mark_all_read();
        assert_eq!(inbox.unread(), 0);
    }
}
