//! Scala 風 `Option` 型の Rust 実装。
//! `Some` / `None` の 2 ケースと、それらを安全に合成するための
//! コンビネータ群（`map` / `flat_map` / `filter` / `fold` など）を提供する。
//!
//! `std::option::Option` を意図的にシャドウする。両方が必要な場面では
//! `StdOption` のような別名を付けて使い分けること。

mod comprehension;
mod error;
mod fold;
mod matcher;
mod option;
#[cfg(feature = "serde")]
mod serde_support;

pub use error::EmptyValueError;
pub use fold::Fold;
pub use matcher::Matcher;
pub use option::{none, option, some, Option};
