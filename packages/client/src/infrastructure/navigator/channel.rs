//! mpsc チャンネルを使った Navigator 実装
//!
//! ## 責務
//!
//! - 遷移要求をルーター側の `UnboundedReceiver` へ送る
//!
//! ## 設計ノート
//!
//! 送信は同期的に完了するため、送信を呼ぶ側（Submission の処理）は
//! 一度も中断されません。ルーター側は受信した要求を非同期に処理します。

use tokio::sync::mpsc;

use crate::{
    domain::{NavigationRequest, Navigator},
    error::NavigationError,
};

/// mpsc チャンネルを使った Navigator 実装
///
/// ## 使用例
///
/// ```ignore
/// let (navigator, mut requests) = ChannelNavigator::new();
/// navigator.navigate(NavigationRequest::conference(target))?;
/// let request = requests.recv().await;
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<NavigationRequest>,
}

impl ChannelNavigator {
    /// 新しい ChannelNavigator と、要求を受け取る receiver を作成
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, request: NavigationRequest) -> Result<(), NavigationError> {
        tracing::debug!(route = %request.route, room = %request.target.room, "navigation requested");
        self.sender
            .send(request)
            .map_err(|e| NavigationError::RouterClosed(e.0.route))
    }
}
