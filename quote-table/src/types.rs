use std::fmt;

use serde::{Deserialize, Serialize};

/// Котировка валютной пары: одна строка данных таблицы.
///
/// Внешние имена полей (serde) совпадают с заголовком таблицы:
/// `currencyPair`, `price`, `changeAbsolute`, `changePercent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Пара вида `BASE/QUOTE`, например `EUR/USD`
    pub currency_pair: String,
    /// Курс
    pub price: f64,
    /// Абсолютное изменение относительно опорной цены (со знаком)
    pub change_absolute: f64,
    /// Изменение в процентах: `-0.42` означает -0.42%, а не долю
    pub change_percent: f64,
}

impl Quote {
    /// Собрать котировку из готовых значений
    pub fn new(
        currency_pair: impl Into<String>,
        price: f64,
        change_absolute: f64,
        change_percent: f64,
    ) -> Self {
        Self {
            currency_pair: currency_pair.into(),
            price,
            change_absolute,
            change_percent,
        }
    }

    /// Базовая валюта (`EUR` для `EUR/USD`)
    pub fn base(&self) -> Option<&str> {
        self.currency_pair.split_once('/').map(|(base, _)| base)
    }

    /// Котируемая валюта (`USD` для `EUR/USD`)
    pub fn counter(&self) -> Option<&str> {
        self.currency_pair.split_once('/').map(|(_, counter)| counter)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.currency_pair, self.price, self.change_absolute, self.change_percent
        )
    }
}
