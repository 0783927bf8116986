use thiserror::Error;

/// Ошибки разбора таблицы котировок.
///
/// `line` везде - номер строки исходного текста, начиная с 1
/// (пустые строки тоже считаются).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Строка данных не делится ровно на нужное число колонок
    #[error("line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        /// Номер строки
        line: usize,
        /// Ожидаемое число колонок
        expected: usize,
        /// Фактическое число токенов
        found: usize,
    },

    /// Значение в числовой колонке не является числом
    #[error("line {line}: invalid number in column {column}: {token:?}")]
    NumericParse {
        /// Номер строки
        line: usize,
        /// Имя колонки из заголовка
        column: &'static str,
        /// Исходный токен
        token: String,
    },

    /// Заголовок не совпадает с ожидаемой схемой (только в strict-режиме)
    #[error("line {line}: unexpected header: {found:?}")]
    HeaderMismatch {
        /// Номер строки
        line: usize,
        /// Токены заголовка как есть
        found: Vec<String>,
    },
}

impl ParseError {
    /// Номер строки, на которой произошла ошибка
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedRow { line, .. }
            | Self::NumericParse { line, .. }
            | Self::HeaderMismatch { line, .. } => *line,
        }
    }
}

/// `Result` с [`ParseError`] по умолчанию
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_line_numbers() {
        let err = ParseError::MalformedRow {
            line: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "line 3: expected 4 columns, found 2");
        assert_eq!(err.line(), 3);

        let err = ParseError::NumericParse {
            line: 7,
            column: "price",
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: invalid number in column price: \"abc\"");
        assert_eq!(err.line(), 7);
    }
}
