//! 画面遷移の実装
//!
//! ## 概要
//!
//! このモジュールは `Navigator` trait の具体的な実装を提供します。
//!
//! ## 実装
//!
//! - `channel`: tokio の mpsc チャンネルでルーターへ要求を渡す実装

pub mod channel;

pub use channel::ChannelNavigator;
