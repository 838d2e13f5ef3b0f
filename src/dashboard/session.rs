use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, warn};

use super::Dashboard;
use crate::errors::Result;
use crate::event::{DataEvent, EventBus};
use crate::storage::BookmarkStore;

/// 绑定到某个用户的仪表盘，收到该用户的数据变更事件后重新拉取
pub struct DashboardSession {
    store: Arc<dyn BookmarkStore>,
    user_id: String,
    events: Receiver<DataEvent>,
    dashboard: Dashboard,
}

impl DashboardSession {
    /// 订阅事件，尚未加载数据
    pub fn new(store: Arc<dyn BookmarkStore>, bus: &EventBus, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            events: bus.subscribe(),
            dashboard: Dashboard::default(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// 修改过滤条件等操作直接作用于内部的 Dashboard
    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    /// 拉取全部链接并替换集合
    pub async fn load(&mut self) -> Result<()> {
        let links = self.store.fetch_links(&self.user_id).await?;
        debug!(
            "Dashboard for {} loaded {} links",
            self.user_id,
            links.len()
        );
        self.dashboard.replace_links(links);
        Ok(())
    }

    /// 处理所有待处理事件，如有相关变更则重新拉取一次
    ///
    /// 返回是否重新拉取了数据。
    pub async fn sync(&mut self) -> Result<bool> {
        let mut stale = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => stale |= event.concerns(&self.user_id),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Dashboard missed {} events, reloading", skipped);
                    stale = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if stale {
            self.load().await?;
        }
        Ok(stale)
    }

    /// 等待下一条相关事件（最多 `timeout`），然后同步
    ///
    /// 超时或通道关闭时返回 `false`。
    pub async fn wait_for_change(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let received = tokio::time::timeout_at(deadline, self.events.recv()).await;
            match received {
                Err(_) => return Ok(false),
                Ok(Err(RecvError::Closed)) => return Ok(false),
                Ok(Err(RecvError::Lagged(_))) => {
                    self.load().await?;
                    return Ok(true);
                }
                Ok(Ok(event)) if event.concerns(&self.user_id) => {
                    self.load().await?;
                    return Ok(true);
                }
                Ok(Ok(_)) => continue,
            }
        }
    }
}
