use thiserror::Error;

/// 空の `Option` から `get` / `try_get` で値を取り出そうとしたときのエラー。
///
/// メッセージは互換性のため `"No such element."` に固定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No such element.")]
pub struct EmptyValueError;
