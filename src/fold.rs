use crate::option::Option;

/// `Option::fold` のカリー化された後半ステップ。
///
/// `fold(if_empty)` が返すバインダで、`apply(f)` を呼んだ時点で初めて
/// どちらかの分岐が評価される。`if_empty` は `None` のときだけ、高々 1 回
/// 評価される。
#[must_use = "apply を呼ばないと fold の分岐は評価されません"]
pub struct Fold<T, D> {
    pub(crate) opt: Option<T>,
    pub(crate) if_empty: D,
}

impl<T, D> Fold<T, D> {
    /// 値が存在すれば `f`、存在しなければ `if_empty` を評価して結果を返す。
    #[inline]
    pub fn apply<B, F>(self, f: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(T) -> B,
    {
        match self.opt {
            Option::Some(value) => f(value),
            Option::None => (self.if_empty)(),
        }
    }
}
