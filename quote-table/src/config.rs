/// Колонки таблицы в порядке следования
pub const COLUMNS: [&str; COLUMN_COUNT] =
    ["currencyPair", "price", "changeAbsolute", "changePercent"];

/// Число колонок в строке данных
pub const COLUMN_COUNT: usize = 4;

/// Что делать со строкой данных, которую не удалось разобрать.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Первая же битая строка прерывает разбор целиком
    #[default]
    Abort,
    /// Битая строка пропускается (с `warn!` в лог), разбор продолжается
    Skip,
}

/// Настройки разбора.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Политика для битых строк данных
    pub row_policy: RowPolicy,
    /// Сверять ли заголовок с [`COLUMNS`]
    pub strict_header: bool,
}

impl ParseOptions {
    /// Задать политику для битых строк
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Включить/выключить сверку заголовка
    pub fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_on_rows_and_lenient_on_header() {
        let opts = ParseOptions::default();
        assert_eq!(opts.row_policy, RowPolicy::Abort);
        assert!(!opts.strict_header);
    }

    #[test]
    fn builders_set_fields() {
        let opts = ParseOptions::default()
            .with_row_policy(RowPolicy::Skip)
            .with_strict_header(true);
        assert_eq!(
            opts,
            ParseOptions {
                row_policy: RowPolicy::Skip,
                strict_header: true,
            }
        );
    }
}
