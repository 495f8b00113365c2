use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Идентификаторы строковые и начинаются с фиксированного префикса
/// из двух символов (например, "ST001" для магазина).
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Обязательный префикс идентификатора
    const PREFIX: &'static str;

    /// Получить ID как строку
    fn as_str(&self) -> &str;

    /// Проверка префикса
    fn has_valid_prefix(s: &str) -> bool {
        s.starts_with(Self::PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    struct TestId(String);

    impl AggregateId for TestId {
        const PREFIX: &'static str = "TT";

        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_prefix_check() {
        assert!(TestId::has_valid_prefix("TT01"));
        assert!(TestId::has_valid_prefix("TT"));
        assert!(!TestId::has_valid_prefix("tt01"));
        assert!(!TestId::has_valid_prefix("XT01"));
        assert!(!TestId::has_valid_prefix(""));
        assert_eq!(TestId("TT7".into()).as_str(), "TT7");
    }
}
