//! serde 連携。
//!
//! `Some(v)` は値そのもの、`None` はホスト形式の null として直列化する。
//! 復元は `std::option::Option` へ委譲してから番兵正規化するため、
//! JSON の `null` は常に `None` へ、`0` や `""` のような偽値は `Some` へ戻る。

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::Option;

type StdOption<T> = std::option::Option<T>;

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Option::Some(value) => serializer.serialize_some(value),
            Option::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StdOption::<T>::deserialize(deserializer).map(Self::from)
    }
}
