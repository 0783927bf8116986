use log::{debug, trace, warn};

use crate::config::{COLUMN_COUNT, COLUMNS, ParseOptions, RowPolicy};
use crate::error::{ParseError, Result};
use crate::types::Quote;

/// Парсер таблицы котировок с фиксированными настройками.
///
/// Состояния между вызовами не хранит: один экземпляр можно
/// использовать из нескольких потоков одновременно.
#[derive(Debug, Clone, Default)]
pub struct TableParser {
    options: ParseOptions,
}

impl TableParser {
    /// Парсер с заданными настройками
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Текущие настройки
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// См. [`parse_with`]
    pub fn parse(&self, raw: &str) -> Result<Vec<Quote>> {
        parse_with(raw, &self.options)
    }
}

/// Парсит таблицу вида:
///
/// ```text
/// currencyPair price   changeAbsolute changePercent
/// EUR/USD     1.0735         -0.0045     -0.42
/// USD/JPY   112.0900          -0.494     -0.44
/// ```
///
/// с настройками по умолчанию (первая битая строка - ошибка).
pub fn parse(raw: &str) -> Result<Vec<Quote>> {
    parse_with(raw, &ParseOptions::default())
}

/// Парсит таблицу с явными настройками.
///
/// Правила:
/// - пустые строки (после trim) пропускаются
/// - первая непустая строка - заголовок, в данные не попадает
/// - колонки разделяются любым количеством пробелов/табов
/// - таблица без строк данных даёт пустой `Vec`, а не ошибку
pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Vec<Quote>> {
    let mut rows = raw
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((header_line, header)) = rows.next() else {
        debug!("empty table");
        return Ok(Vec::new());
    };

    if options.strict_header {
        check_header(header_line, header)?;
    }
    debug!("header at line {header_line}: {header}");

    let mut quotes = Vec::new();

    for (line, text) in rows {
        match parse_row(line, text) {
            Ok(quote) => {
                trace!("line {line}: {quote}");
                quotes.push(quote);
            }
            Err(e) => match options.row_policy {
                RowPolicy::Abort => return Err(e),
                RowPolicy::Skip => warn!("skipping row: {e}"),
            },
        }
    }

    debug!("parsed {} quotes", quotes.len());
    Ok(quotes)
}

fn check_header(line: usize, header: &str) -> Result<()> {
    let found: Vec<&str> = header.split_whitespace().collect();
    if found != COLUMNS {
        return Err(ParseError::HeaderMismatch {
            line,
            found: found.into_iter().map(String::from).collect(),
        });
    }
    Ok(())
}

fn parse_row(line: usize, text: &str) -> Result<Quote> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let [pair, price, change_absolute, change_percent] = tokens.as_slice() else {
        return Err(ParseError::MalformedRow {
            line,
            expected: COLUMN_COUNT,
            found: tokens.len(),
        });
    };

    Ok(Quote {
        currency_pair: pair.to_string(),
        price: parse_number(line, COLUMNS[1], price)?,
        change_absolute: parse_number(line, COLUMNS[2], change_absolute)?,
        change_percent: parse_number(line, COLUMNS[3], change_percent)?,
    })
}

// `inf`/`NaN` f64::from_str принимает, нам они не нужны
fn parse_number(line: usize, column: &'static str, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::NumericParse {
            line,
            column,
            token: token.to_string(),
        })
}
