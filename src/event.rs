//! 数据变更事件
//!
//! Services publish one [`DataEvent`] after every successful mutation;
//! dashboards subscribe and re-fetch when an event concerns their user.

use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use tokio::sync::broadcast;
use tracing::debug;

/// 默认广播缓冲区大小，落后超过此数量的订阅者会收到 Lagged
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(tag = "type", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataEvent {
    LinkCreated { user_id: String, link_id: String },
    LinkUpdated { user_id: String, link_id: String },
    LinkDeleted { user_id: String, link_id: String },
    CategoryCreated { user_id: String, category_id: String },
    CategoryDeleted { user_id: String, category_id: String },
    TagCreated { user_id: String, tag_id: String },
    TagDeleted { user_id: String, tag_id: String },
}

impl DataEvent {
    pub fn user_id(&self) -> &str {
        match self {
            DataEvent::LinkCreated { user_id, .. }
            | DataEvent::LinkUpdated { user_id, .. }
            | DataEvent::LinkDeleted { user_id, .. }
            | DataEvent::CategoryCreated { user_id, .. }
            | DataEvent::CategoryDeleted { user_id, .. }
            | DataEvent::TagCreated { user_id, .. }
            | DataEvent::TagDeleted { user_id, .. } => user_id,
        }
    }

    /// 被修改对象的 id
    pub fn subject_id(&self) -> &str {
        match self {
            DataEvent::LinkCreated { link_id, .. }
            | DataEvent::LinkUpdated { link_id, .. }
            | DataEvent::LinkDeleted { link_id, .. } => link_id,
            DataEvent::CategoryCreated { category_id, .. }
            | DataEvent::CategoryDeleted { category_id, .. } => category_id,
            DataEvent::TagCreated { tag_id, .. } | DataEvent::TagDeleted { tag_id, .. } => tag_id,
        }
    }

    pub fn concerns(&self, user_id: &str) -> bool {
        self.user_id() == user_id
    }
}

/// 事件总线，克隆后共享同一个广播通道
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DataEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DataEvent> {
        self.sender.subscribe()
    }

    /// 发布事件，返回收到事件的订阅者数量；没有订阅者不算错误
    pub fn publish(&self, event: DataEvent) -> usize {
        let kind = event.as_ref().to_string();
        match self.sender.send(event) {
            Ok(receivers) => {
                debug!("Published {} to {} subscribers", kind, receivers);
                receivers
            }
            Err(_) => 0,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(user: &str, id: &str) -> DataEvent {
        DataEvent::LinkCreated {
            user_id: user.to_string(),
            link_id: id.to_string(),
        }
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::default();
        assert_eq!(bus.publish(created("u1", "l1")), 0);
    }

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let clone = bus.clone();

        assert_eq!(clone.publish(created("u1", "l1")), 1);
        let event = rx.recv().await.unwrap();
        assert_eq!(event.user_id(), "u1");
        assert_eq!(event.subject_id(), "l1");
        assert!(event.concerns("u1"));
        assert!(!event.concerns("u2"));
    }

    #[test]
    fn test_event_names() {
        let event = DataEvent::TagDeleted {
            user_id: "u1".into(),
            tag_id: "t1".into(),
        };
        assert_eq!(event.as_ref(), "tag_deleted");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "tag_deleted");
        assert_eq!(json["tag_id"], "t1");
    }
}
