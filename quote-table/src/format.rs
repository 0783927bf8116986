use crate::config::{COLUMN_COUNT, COLUMNS};
use crate::types::Quote;

/// Форматирует котировки обратно в выровненную таблицу с заголовком.
///
/// Каждая колонка дополняется пробелами до самой широкой ячейки,
/// числа печатаются через `Display` для `f64`, поэтому
/// [`parse`](crate::parse) возвращает те же самые значения.
pub fn format_table(quotes: &[Quote]) -> String {
    let rows: Vec<[String; COLUMN_COUNT]> = quotes
        .iter()
        .map(|q| {
            [
                q.currency_pair.clone(),
                q.price.to_string(),
                q.change_absolute.to_string(),
                q.change_percent.to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS[..], &widths);
    for row in &rows {
        push_row(&mut out, &row[..], &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;

    const MARKET_DATA: &str = include_str!("../assets/market_data.txt");

    #[test]
    fn empty_slice_renders_header_only() {
        assert_eq!(
            format_table(&[]),
            "currencyPair price changeAbsolute changePercent\n"
        );
    }

    #[test]
    fn columns_are_aligned() {
        let quotes = vec![
            Quote::new("EUR/USD", 1.0735, -0.0045, -0.42),
            Quote::new("USD/JPY", 112.09, -0.494, -0.44),
        ];
        let expected = "\
currencyPair price  changeAbsolute changePercent
EUR/USD      1.0735 -0.0045        -0.42
USD/JPY      112.09 -0.494         -0.44
";
        assert_eq!(format_table(&quotes), expected);
    }

    #[test]
    fn formatted_table_parses_back() {
        let quotes = parse(MARKET_DATA).unwrap();
        let text = format_table(&quotes);
        assert_eq!(parse(&text).unwrap(), quotes);
    }
}
