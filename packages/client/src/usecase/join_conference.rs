//! UseCase: 会議への参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinConferenceUseCase::execute() メソッド
//! - 入力の解決（room / serverURL への分解）と会議画面への遷移要求
//!
//! ### なぜこのテストが必要か
//! - room が空の場合に遷移しないことを保証
//! - serverURL の正規化が 1 回だけ行われることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：room のみ、serverURL/room、入力が空で生成名を使う場合
//! - 異常系：ルーターが既に閉じている
//! - エッジケース："/" で終わる入力、入力も生成名も空

use std::sync::Arc;

use crate::{
    domain::{NavigationRequest, Navigator, ServerUrlNormalizer, SessionTarget, resolve},
    error::NavigationError,
};

/// 参加処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// 会議画面への遷移を要求した
    Navigated(SessionTarget),
    /// room が空だったため何もしなかった
    Ignored,
}

/// 会議参加のユースケース
pub struct JoinConferenceUseCase {
    /// ServerUrlNormalizer（serverURL 正規化の抽象化）
    normalizer: Arc<dyn ServerUrlNormalizer>,
    /// Navigator（画面遷移の抽象化）
    navigator: Arc<dyn Navigator>,
}

impl JoinConferenceUseCase {
    /// 新しい JoinConferenceUseCase を作成
    pub fn new(normalizer: Arc<dyn ServerUrlNormalizer>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            normalizer,
            navigator,
        }
    }

    /// 会議参加を実行
    ///
    /// # Arguments
    ///
    /// * `raw_input` - ユーザーが入力した文字列（未正規化）
    /// * `fallback` - 入力が空の場合に使う生成済みルーム名
    ///
    /// # Returns
    ///
    /// * `Ok(JoinOutcome::Navigated)` - 遷移要求を送信した
    /// * `Ok(JoinOutcome::Ignored)` - room が空のため遷移しなかった
    /// * `Err(NavigationError)` - 遷移要求を受け付けてもらえなかった
    pub fn execute(
        &self,
        raw_input: &str,
        fallback: &str,
    ) -> Result<JoinOutcome, NavigationError> {
        // 1. 入力を room / serverURL に解決
        let Some(target) = resolve(raw_input, fallback, self.normalizer.as_ref()) else {
            tracing::debug!(raw_input, "Resolved room is empty, join ignored");
            return Ok(JoinOutcome::Ignored);
        };

        // 2. 会議画面への遷移を要求
        self.navigator
            .navigate(NavigationRequest::conference(target.clone()))
            .inspect_err(|e| tracing::warn!("Failed to navigate to conference: {}", e))?;

        tracing::info!(
            room = %target.room,
            server_url = target.server_url.as_deref().unwrap_or("<default>"),
            "Joining conference"
        );

        Ok(JoinOutcome::Navigated(target))
    }
}
