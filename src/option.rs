//! `Option` 型の本体。
//!
//! 値の存在を `Some`、不在を `None` で表す直和型と、
//! それを安全に合成するコンビネータ群を定義する。
//! `get` を除くすべての操作は失敗せず、空であれば空のまま伝播する。

use std::fmt::{self, Display};

use crate::error::EmptyValueError;
use crate::fold::Fold;
use crate::matcher::Matcher;

type StdOption<T> = std::option::Option<T>;

/// 値の存在（`Some`）と不在（`None`）を表す直和型。
///
/// 不在は常にこの `None` ケースひとつで表現し、第三の状態は存在しない。
/// すべてのコンビネータは新しい値を返すか自分自身を返すかのいずれかで、
/// ケースをその場で書き換える操作はない。
#[must_use = "Option の戻り値を無視すると失敗を見逃します"]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// 値を保持するケース。
    Some(T),
    /// 値が存在しないケース。
    None,
}

impl<T> Option<T> {
    /// 値が存在するかどうかを返す。
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// 空であるかどうかを返す。常に `!is_defined()` と一致する。
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// `is_defined` の別名。
    #[inline]
    pub const fn non_empty(&self) -> bool {
        self.is_defined()
    }

    /// 値が存在し、かつ述語 `p` が真を返すかどうかを判定する。
    /// `None` のとき `p` は呼ばれない。
    #[inline]
    pub fn exists<P>(&self, p: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => p(value),
            Self::None => false,
        }
    }

    /// 述語 `p` がすべての値について成り立つかどうかを判定する。
    /// `None` は空虚に真。`p` は `None` のとき呼ばれない。
    #[inline]
    pub fn for_all<P>(&self, p: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => p(value),
            Self::None => true,
        }
    }

    /// 述語 `p` が真を返す場合だけ自分自身を返し、それ以外は `None` を返す。
    #[inline]
    #[must_use = "filter の結果を無視すると絞り込みが失われます"]
    pub fn filter<P>(self, p: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if p(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// `filter` の双対。述語 `p` が偽を返す場合だけ自分自身を返す。
    #[inline]
    #[must_use = "filter_not の結果を無視すると絞り込みが失われます"]
    pub fn filter_not<P>(self, p: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if p(&value) {
                    Self::None
                } else {
                    Self::Some(value)
                }
            }
            Self::None => Self::None,
        }
    }

    /// 値を写像し、新しい `Option` を返す。`None` のとき `f` は呼ばれない。
    #[inline]
    #[must_use = "map の結果を無視すると計算が消失します"]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(f(value)),
            Self::None => Option::None,
        }
    }

    /// `Option` を返す関数で連鎖させる。`f` の結果を再ラップしない。
    /// `None` のとき `f` は呼ばれない。
    #[inline]
    #[must_use = "flat_map の結果を無視すると計算が消失します"]
    pub fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Option::None,
        }
    }

    /// カリー化された畳み込みの前半ステップ。
    ///
    /// `fold(if_empty).apply(f)` で、値が存在すれば `f(value)`、
    /// 存在しなければ `if_empty()` を返す。`if_empty` は `None` のときだけ、
    /// 高々 1 回評価される。
    #[inline]
    pub fn fold<D>(self, if_empty: D) -> Fold<T, D> {
        Fold {
            opt: self,
            if_empty,
        }
    }

    /// 値が存在すれば `f` を副作用のために 1 回だけ呼ぶ。`None` は何もしない。
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Self::Some(value) = self {
            f(value);
        }
    }

    /// 値を取り出す。`None` のときはメッセージ `"No such element."` で
    /// panic する。これが失敗しうる唯一の操作であり、安全に取り出したい
    /// 場合は `try_get` / `get_or_else` / `or_null` / `match_with` を使う。
    #[inline]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic_empty_get(),
        }
    }

    /// `get` の検査済みエラー版。`None` のとき `EmptyValueError` を返す。
    #[inline]
    pub fn try_get(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(EmptyValueError),
        }
    }

    /// 値が存在すればそれを、存在しなければ `default()` の結果を返す。
    /// `default` は `None` のときだけ、高々 1 回評価される。
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> T
    where
        D: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// `get_or_else` の値渡し版。遅延評価を伴わない。
    #[inline]
    pub fn get_or_else_value(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// 値が存在すれば自分自身を、存在しなければ `alternative()` の結果を返す。
    /// `alternative` は `Some` のとき呼ばれない。
    #[inline]
    #[must_use = "or_else の結果を無視すると代替値が失われます"]
    pub fn or_else<F>(self, alternative: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative(),
        }
    }

    /// `or_else` の値渡し版。遅延評価を伴わない。
    #[inline]
    #[must_use = "or_else_value の結果を無視すると代替値が失われます"]
    pub fn or_else_value(self, alternative: Option<T>) -> Option<T> {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative,
        }
    }

    /// 2 分岐のマッチャでパターンマッチする。呼ばれる分岐は常に一方だけ。
    #[inline]
    pub fn match_with<B, S, N>(self, matcher: Matcher<S, N>) -> B
    where
        S: FnOnce(T) -> B,
        N: FnOnce() -> B,
    {
        match self {
            Self::Some(value) => (matcher.some)(value),
            Self::None => (matcher.none)(),
        }
    }

    /// 標準の `Option` へ変換する。Rust における null / undefined 相当は
    /// `std` の `None` ひとつなので、元 API の `orNull` / `orUndefined` は
    /// この操作に集約される。
    #[inline]
    pub fn or_null(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::None => StdOption::None,
        }
    }

    /// 値を 0 個または 1 個含む `Vec` へ変換する。呼び出しごとに
    /// 新しく確保し、共有やキャッシュは行わない。
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Self::Some(value) => vec![value.clone()],
            Self::None => Vec::new(),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn panic_empty_get() -> ! {
    panic!("{}", EmptyValueError)
}

/// 値を無条件に `Some` でラップする。番兵値の検査は行わない。
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// 正準の空値。任意の `Option<T>` として利用できる。
#[inline]
pub fn none<T>() -> Option<T> {
    Option::None
}

/// 番兵値を正規化するコンストラクタ。`std` の `None`（null / undefined 相当）
/// は `None` へ、それ以外の値は `0` や空文字列のような偽値も含めて
/// `Some` へ変換する。
#[inline]
pub fn option<T>(value: StdOption<T>) -> Option<T> {
    match value {
        StdOption::Some(value) => Option::Some(value),
        StdOption::None => Option::None,
    }
}

impl<T> Default for Option<T> {
    /// 既定値は正準の空値。
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    /// `option` と同じ番兵正規化。
    #[inline]
    fn from(value: StdOption<T>) -> Self {
        option(value)
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    /// `or_null` と同じ変換。
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.or_null()
    }
}

impl<T: Display> Display for Option<T> {
    /// `Some` は `Some(<値>)`、`None` はリテラル `None` として描画する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value})"),
            Self::None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{none, option, some, Matcher, Option};

    #[test]
    fn option_normalizes_std_none() {
        assert_eq!(option::<i32>(None), none());
        assert_eq!(option(Some(5)), some(5));
    }

    #[test]
    fn option_keeps_falsy_values() {
        // 0 / 空文字列 / false は不在ではなく正当な値。
        assert_eq!(option(Some(0)), some(0));
        assert_eq!(option(Some("")), some(""));
        assert_eq!(option(Some(false)), some(false));
    }

    #[test]
    fn get_returns_the_value() {
        assert_eq!(some(5).get(), 5);
    }

    #[test]
    #[should_panic(expected = "No such element.")]
    fn get_panics_on_none() {
        let _ = none::<i32>().get();
    }

    #[test]
    fn try_get_reports_empty_value_error() {
        assert_eq!(some(5).try_get(), Ok(5));
        let err = none::<i32>().try_get().unwrap_err();
        assert_eq!(err.to_string(), "No such element.");
    }

    #[test]
    fn fold_selects_exactly_one_branch() {
        assert_eq!(some(2).fold(|| -1).apply(|x| x * 3), 6);
        assert_eq!(none::<i32>().fold(|| -1).apply(|x| x * 3), -1);
    }

    #[test]
    fn fold_evaluates_if_empty_only_on_none() {
        let calls = Cell::new(0u32);
        let result = some(2).fold(|| {
            calls.set(calls.get() + 1);
            -1
        });
        assert_eq!(result.apply(|x| x * 3), 6);
        assert_eq!(calls.get(), 0);

        let calls = Cell::new(0u32);
        let result = none::<i32>().fold(|| {
            calls.set(calls.get() + 1);
            -1
        });
        assert_eq!(result.apply(|x| x * 3), -1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn for_each_visits_some_exactly_once() {
        let visited = Cell::new(0u32);
        some(7).for_each(|x| {
            assert_eq!(x, 7);
            visited.set(visited.get() + 1);
        });
        assert_eq!(visited.get(), 1);

        none::<i32>().for_each(|_| visited.set(visited.get() + 1));
        assert_eq!(visited.get(), 1);
    }

    #[test]
    fn predicates_are_not_invoked_on_none() {
        let calls = Cell::new(0u32);
        let count = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        assert!(!none::<i32>().exists(count));
        assert!(none::<i32>().for_all(count));
        assert_eq!(none::<i32>().filter(count), none());
        assert_eq!(none::<i32>().filter_not(count), none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn defaults_are_not_evaluated_on_some() {
        let calls = Cell::new(0u32);
        let value = some(5).get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 5);

        let alternative = some(5).or_else(|| {
            calls.set(calls.get() + 1);
            some(0)
        });
        assert_eq!(alternative, some(5));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn match_with_invokes_one_branch() {
        let value = some(11).match_with(Matcher {
            some: |x| format!("value:{x}"),
            none: || "empty".to_string(),
        });
        assert_eq!(value, "value:11");

        let value = none::<i32>().match_with(Matcher {
            some: |x| format!("value:{x}"),
            none: || "empty".to_string(),
        });
        assert_eq!(value, "empty");
    }

    #[test]
    fn to_vec_allocates_per_call() {
        let opt = some(3);
        let first = opt.to_vec();
        let second = opt.to_vec();
        assert_eq!(first, vec![3]);
        assert_eq!(second, vec![3]);
        assert_ne!(first.as_ptr(), second.as_ptr());
        assert!(none::<i32>().to_vec().is_empty());
    }

    #[test]
    fn display_matches_the_original_rendering() {
        assert_eq!(some(2016).to_string(), "Some(2016)");
        assert_eq!(none::<i32>().to_string(), "None");
    }

    #[test]
    fn default_is_the_canonical_empty_value() {
        assert_eq!(Option::<i32>::default(), none());
    }

    #[test]
    fn std_option_bridges_round_trip() {
        let opt: Option<i32> = Some(4).into();
        assert_eq!(opt, some(4));
        assert_eq!(some(4).or_null(), Some(4));
        assert_eq!(none::<i32>().or_null(), None);
    }
}
