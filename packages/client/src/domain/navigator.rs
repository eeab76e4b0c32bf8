//! Navigator trait 定義
//!
//! ウェルカム画面が会議画面へ遷移するためのインターフェースを定義します。
//! 具体的なルーティングは Infrastructure 層が提供します（依存性の逆転）。

use serde::Serialize;

use crate::error::NavigationError;

use super::SessionTarget;

/// Route of the conference screen
pub const CONFERENCE_ROUTE: &str = "/conference";

/// A request to move to another screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub route: String,
    pub target: SessionTarget,
}

impl NavigationRequest {
    /// Request to enter the conference described by `target`
    pub fn conference(target: SessionTarget) -> Self {
        Self {
            route: CONFERENCE_ROUTE.to_string(),
            target,
        }
    }
}

/// Navigator trait
///
/// UseCase 層はこの trait に依存し、ルーティングの具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// 画面遷移を要求する
    fn navigate(&self, request: NavigationRequest) -> Result<(), NavigationError>;
}
