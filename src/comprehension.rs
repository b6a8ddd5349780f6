//! for 内包表記風の連鎖マクロ。
//!
//! `for_comprehension!(opt, f1, .., fN)` は最後を除く各関数を `flat_map` で、
//! 最後の関数を `map` で左から右へ適用する展開を行う。途中のステップが
//! `None` を返した時点で以降の関数は `flat_map` の契約により呼ばれず、
//! 全体の結果は `None` になる。
//!
//! 関数を 1 つも渡さない呼び出しはコンパイルエラーとして拒否する。
//! 元実装では `None` 側が黙って空を返す一方、`Some` 側は未定義の終端関数を
//! 適用しようとする潜在欠陥があり、ここでは両者に代えて
//! 「少なくとも 1 つの関数が必要」という定義済みエラーに統一した。

/// `flat_map` の連鎖と終端の `map` を 1 つの式に展開する。
///
/// 最後の引数だけが素の値を返す関数で、それ以外は `Option` を返す関数。
///
/// ```
/// use option_prelude::{for_comprehension, some};
///
/// let result = for_comprehension!(
///     some(2),
///     |x: i32| some(x + 1),
///     |x: i32| x * 10
/// );
/// assert_eq!(result, some(30));
/// ```
#[macro_export]
macro_rules! for_comprehension {
    ($opt:expr $(,)?) => {
        compile_error!("for_comprehension! requires at least one function")
    };
    ($opt:expr, $last:expr $(,)?) => {
        $opt.map($last)
    };
    ($opt:expr, $head:expr $(, $rest:expr)+ $(,)?) => {
        $crate::for_comprehension!($opt.flat_map($head) $(, $rest)+)
    };
}
