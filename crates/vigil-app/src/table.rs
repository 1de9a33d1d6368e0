// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::RowKey;

#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Text(String),
    /// Classification value rendered through the badge table.
    Badge(&'static str),
    /// Completion or score, clamped to 0..=100 on display.
    Percent(u8),
    Count(i64),
    Date(Option<Date>),
    Money(Option<i64>),
}

impl TableCell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Badge(value) => (*value).to_owned(),
            Self::Percent(value) => format!("{}%", (*value).min(100)),
            Self::Count(value) => value.to_string(),
            Self::Date(Some(value)) => value.to_string(),
            Self::Date(None) => String::new(),
            Self::Money(Some(cents)) => format_compact_money(*cents),
            Self::Money(None) => String::new(),
        }
    }
}

pub fn format_compact_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let absolute = cents.unsigned_abs();
    let dollars = (absolute as f64) / 100.0;
    if dollars < 1000.0 {
        return format!("{sign}${dollars:.2}");
    }

    let (value, suffix) = if dollars < 1_000_000.0 {
        (dollars / 1000.0, "k")
    } else if dollars < 1_000_000_000.0 {
        (dollars / 1_000_000.0, "M")
    } else {
        (dollars / 1_000_000_000.0, "B")
    };

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{sign}${rounded:.0}{suffix}")
    } else {
        format!("{sign}${rounded:.1}{suffix}")
    }
}

/// A record that can be laid out as one table row.
pub trait TableRow {
    fn columns() -> &'static [&'static str];

    fn row_key(&self) -> RowKey;

    fn cells(&self) -> Vec<TableCell>;

    /// Lines for the nested sub-records shown when the row is expanded.
    fn details(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowProjection {
    pub key: RowKey,
    pub cells: Vec<TableCell>,
    pub details: Vec<String>,
    pub expanded: bool,
}

impl RowProjection {
    pub fn project<T: TableRow>(record: &T, expanded: bool) -> Self {
        Self {
            key: record.row_key(),
            cells: record.cells(),
            details: record.details(),
            expanded,
        }
    }

    pub fn expandable(&self) -> bool {
        !self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{TableCell, format_compact_money};
    use time::macros::date;

    #[test]
    fn cells_display_their_values() {
        assert_eq!(TableCell::text("Alpha").display(), "Alpha");
        assert_eq!(TableCell::Badge("High").display(), "High");
        assert_eq!(TableCell::Percent(140).display(), "100%");
        assert_eq!(TableCell::Count(12).display(), "12");
        assert_eq!(
            TableCell::Date(Some(date!(2026 - 03 - 01))).display(),
            "2026-03-01"
        );
        assert_eq!(TableCell::Date(None).display(), "");
        assert_eq!(TableCell::Money(None).display(), "");
    }

    #[test]
    fn compact_money_uses_suffixes() {
        assert_eq!(format_compact_money(95_000), "$950.00");
        assert_eq!(format_compact_money(12_000_000), "$120k");
        assert_eq!(format_compact_money(-4_550_000), "-$45.5k");
        assert_eq!(format_compact_money(250_000_000), "$2.5M");
    }
}
