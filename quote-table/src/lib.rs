//! # quote-table
//!
//! Разбор текстовой таблицы котировок валютных пар, выровненной пробелами.
//!
//! Этот крейт содержит:
//!
//! - [`table`] — парсер таблицы ([`parse`], [`parse_with`], [`TableParser`])
//! - [`format`] — обратное преобразование котировок в выровненную таблицу
//! - [`config`] — схема колонок и настройки разбора
//! - [`types`] — доменные типы
//! - [`error`] — ошибки разбора
//!
//! ## Быстрый пример
//!
//! ```rust
//! use quote_table::{parse, Quote};
//!
//! let raw = "
//! currencyPair price   changeAbsolute changePercent
//! EUR/USD     1.0735         -0.0045     -0.42
//! USD/JPY   112.0900          -0.494     -0.44
//! ";
//!
//! let quotes = parse(raw).unwrap();
//! assert_eq!(quotes.len(), 2);
//! assert_eq!(quotes[0], Quote::new("EUR/USD", 1.0735, -0.0045, -0.42));
//! ```
//!
//! ## Пример: пропуск битых строк
//!
//! ```rust
//! use quote_table::{ParseOptions, RowPolicy, TableParser};
//!
//! let raw = "currencyPair price changeAbsolute changePercent\n\
//!            EUR/USD 1.0735\n\
//!            USD/JPY 112.09 -0.494 -0.44\n";
//!
//! let parser = TableParser::new(ParseOptions::default().with_row_policy(RowPolicy::Skip));
//! let quotes = parser.parse(raw).unwrap();
//! assert_eq!(quotes.len(), 1);
//! assert_eq!(quotes[0].currency_pair, "USD/JPY");
//! ```
//!
//! ## Дизайн
//!
//! Разбор - чистая функция над `&str`: без I/O, без состояния между
//! вызовами. Откуда взялся текст (файл, сеть, литерал) - забота вызывающего.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Парсер таблицы котировок.
pub mod table;

/// Форматирование котировок в таблицу.
pub mod format;

/// Схема колонок и настройки разбора.
pub mod config;

/// Доменные типы (котировка).
pub mod types;

/// Ошибки `quote-table`.
pub mod error;

// --- Re-exports (публичный фасад API) ---

pub use crate::config::{ParseOptions, RowPolicy};
pub use crate::error::{ParseError, Result};
pub use crate::format::format_table;
pub use crate::table::{TableParser, parse, parse_with};
pub use crate::types::Quote;
