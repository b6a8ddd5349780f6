/// `Option::match_with` に渡す 2 分岐のマッチャ。
///
/// `some` は値を保持するケース、`none` は空のケースで呼ばれる。
/// 呼ばれるのは常にどちらか一方だけで、それぞれ高々 1 回。
#[derive(Debug, Clone, Copy)]
pub struct Matcher<S, N> {
    /// 値が存在するケースの分岐。
    pub some: S,
    /// 値が存在しないケースの分岐。
    pub none: N,
}
