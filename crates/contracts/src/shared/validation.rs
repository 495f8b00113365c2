//! Общие проверки полей, используемые агрегатами в `validate()`

use super::error::ValidationError;
use crate::domain::common::AggregateId;

/// Поле обязательно: пустая строка или строка из пробелов считается отсутствующей
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Идентификатор должен начинаться с префикса своего типа
pub fn require_prefix<Id: AggregateId>(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !Id::has_valid_prefix(value) {
        return Err(ValidationError::BadPrefix {
            field,
            prefix: Id::PREFIX,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Верхняя граница цены и себестоимости; произведение на количество единиц остается конечным
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Денежная величина: конечное число в диапазоне 0..=MAX_AMOUNT
pub fn require_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            reason: "must be a finite number".into(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            reason: "must not be negative".into(),
        });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::InvalidValue {
            field,
            reason: format!("must not exceed {}", MAX_AMOUNT),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("label", "Main St").is_ok());
        assert_eq!(
            require_text("label", "   "),
            Err(ValidationError::MissingField { field: "label" })
        );
    }

    #[test]
    fn test_require_amount() {
        assert!(require_amount("price", 0.0).is_ok());
        assert!(require_amount("price", 12.5).is_ok());
        assert!(require_amount("price", -0.01).is_err());
        assert!(require_amount("price", f64::NAN).is_err());
        assert!(require_amount("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_amount_upper_bound() {
        assert!(require_amount("cost", MAX_AMOUNT).is_ok());
        assert!(matches!(
            require_amount("cost", 1e308),
            Err(ValidationError::InvalidValue { field: "cost", .. })
        ));
    }
}
