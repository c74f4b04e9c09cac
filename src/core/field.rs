//! Declarative field specs and the resolver that turns them into text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;

use super::diagnostics::{Diagnostics, RowIssue};
use super::table::Row;

/// Computes a value from a whole row; `None` means absent.
pub type DeriveFn = fn(&Row<'_>) -> Option<String>;

/// Where a field's value comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Fixed text, no row lookup.
    Literal(&'static str),
    /// One source column.
    Column(&'static str),
    /// The first of several columns that holds a present value.
    FirstOf(&'static [&'static str]),
    /// Decimal sum of the present values of several columns.
    Sum(&'static [&'static str]),
    /// The record's generated GUID followed by a fixed suffix.
    Guid(&'static str),
    /// The 1-based position of the current row in its table.
    Position,
    /// The configured company name.
    Company,
    /// A value computed from the whole row.
    Derived(DeriveFn),
}

/// Reformatting applied to a present value before escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    None,
    /// `DD-MM-YYYY` to `YYYYMMDD`.
    CompactDate,
    /// `DD-MM-YYYY` to `D-Mon-YYYY` (no leading zero on the day).
    LongDate,
    /// Decimal amount with at least two decimal places.
    Amount,
    /// Negated absolute amount.
    Negated,
    /// Trimmed and uppercased.
    Upper,
}

/// One output field: a source, a default for absent values and a transform.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub source: Source,
    pub default: &'static str,
    pub transform: Transform,
}

impl FieldSpec {
    fn from_source(source: Source) -> Self {
        Self {
            source,
            default: "",
            transform: Transform::None,
        }
    }

    pub fn literal(text: &'static str) -> Self {
        Self::from_source(Source::Literal(text))
    }

    pub fn column(name: &'static str) -> Self {
        Self::from_source(Source::Column(name))
    }

    pub fn first_of(columns: &'static [&'static str]) -> Self {
        Self::from_source(Source::FirstOf(columns))
    }

    pub fn sum(columns: &'static [&'static str]) -> Self {
        Self::from_source(Source::Sum(columns))
    }

    pub fn guid(suffix: &'static str) -> Self {
        Self::from_source(Source::Guid(suffix))
    }

    pub fn position() -> Self {
        Self::from_source(Source::Position)
    }

    pub fn company() -> Self {
        Self::from_source(Source::Company)
    }

    pub fn derived(f: DeriveFn) -> Self {
        Self::from_source(Source::Derived(f))
    }

    /// Text to emit when the source is absent.
    pub fn or(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn compact_date(self) -> Self {
        self.transform(Transform::CompactDate)
    }

    pub fn long_date(self) -> Self {
        self.transform(Transform::LongDate)
    }

    pub fn amount(self) -> Self {
        self.transform(Transform::Amount)
    }

    pub fn negated(self) -> Self {
        self.transform(Transform::Negated)
    }

    pub fn upper(self) -> Self {
        self.transform(Transform::Upper)
    }

    /// Resolve this field against a row scope. Never fails: absent data
    /// yields the default, malformed dates yield an empty string and an
    /// entry in `diag`. The result is XML-escaped.
    pub fn resolve(&self, scope: &Scope<'_>, diag: &mut Diagnostics) -> String {
        let text = match self.raw(scope) {
            None => Cow::Borrowed(self.default),
            Some(value) => self.apply(value, scope, diag),
        };
        escape(&text)
    }

    fn raw<'s>(&self, scope: &Scope<'s>) -> Option<Cow<'s, str>> {
        match &self.source {
            Source::Literal(text) => Some(Cow::Borrowed(*text)),
            Source::Column(col) => scope.row.get(col).map(Cow::Borrowed),
            Source::FirstOf(cols) => cols.iter().find_map(|c| scope.row.get(c)).map(Cow::Borrowed),
            Source::Sum(cols) => sum_columns(&scope.row, cols).map(|d| Cow::Owned(d.to_string())),
            Source::Guid(suffix) => Some(Cow::Owned(format!("{}{suffix}", scope.guid))),
            Source::Position => Some(Cow::Owned(scope.row.position().to_string())),
            Source::Company => Some(Cow::Borrowed(scope.company)),
            Source::Derived(f) => f(&scope.row).map(Cow::Owned),
        }
    }

    fn apply<'v>(&self, value: Cow<'v, str>, scope: &Scope<'_>, diag: &mut Diagnostics) -> Cow<'v, str> {
        let reformatted = match self.transform {
            Transform::None => return value,
            Transform::CompactDate => parse_dmy(&value).map(|d| d.format("%Y%m%d").to_string()),
            Transform::LongDate => parse_dmy(&value).map(|d| d.format("%-d-%b-%Y").to_string()),
            Transform::Amount => parse_amount(&value).map(format_amount),
            Transform::Negated => parse_amount(&value).map(|d| format_amount(-d.abs())),
            Transform::Upper => Some(value.trim().to_uppercase()),
        };
        match (reformatted, self.transform) {
            (Some(text), _) => Cow::Owned(text),
            (None, Transform::CompactDate | Transform::LongDate) => {
                tracing::warn!(
                    row = scope.row.position(),
                    field = self.label(),
                    value = %value,
                    "unparseable date, emitting empty value"
                );
                diag.push(RowIssue::DateFormat {
                    row: scope.row.index(),
                    column: self.label().to_string(),
                    value: value.into_owned(),
                });
                Cow::Borrowed("")
            }
            // Unparseable amounts pass through as text.
            (None, _) => value,
        }
    }

    /// The source column name, for diagnostics.
    pub fn label(&self) -> &'static str {
        match &self.source {
            Source::Column(col) => *col,
            Source::FirstOf(cols) | Source::Sum(cols) => cols.first().copied().unwrap_or(""),
            _ => "",
        }
    }
}

/// What a field resolves against: the current row plus per-record context.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub row: Row<'a>,
    pub guid: &'a str,
    pub company: &'a str,
}

/// Escape `& < > " '` for XML text and attribute values.
pub fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Parse a `DD-MM-YYYY` date.
pub fn parse_dmy(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d-%m-%Y").ok()
}

/// Parse an amount, tolerating thousands separators.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Format an amount with at least two decimal places, trailing zeros
/// beyond that stripped.
pub fn format_amount(d: Decimal) -> String {
    if d.is_zero() {
        return "0.00".into();
    }
    let s = d.normalize().to_string();
    if let Some(dot_pos) = s.find('.') {
        let decimals = s.len() - dot_pos - 1;
        if decimals < 2 {
            format!("{s}{}", "0".repeat(2 - decimals))
        } else {
            s
        }
    } else {
        format!("{s}.00")
    }
}

/// Sum of the parseable amounts in `columns`. `None` when none is present
/// or the total overflows, so the field falls back to its default.
fn sum_columns(row: &Row<'_>, columns: &[&str]) -> Option<Decimal> {
    let mut total = None;
    for col in columns {
        if let Some(amount) = row.get(col).and_then(parse_amount) {
            total = Some(total.unwrap_or(Decimal::ZERO).checked_add(amount)?);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Table;
    use rust_decimal_macros::dec;

    fn table() -> Table {
        Table::new(
            ["name", "posting_date", "received_amount", "total_taxes_and_charges", "note"],
            vec![
                vec!["PE-1", "05-01-2024", "100", "18.5", "A & B <c>"],
                vec!["", "2024-01-05", "", "", "nan"],
            ],
        )
    }

    fn resolve(spec: &FieldSpec, t: &Table, row: usize, diag: &mut Diagnostics) -> String {
        let scope = Scope {
            row: t.row(row).unwrap(),
            guid: "g-1",
            company: "Acme & Co",
        };
        spec.resolve(&scope, diag)
    }

    #[test]
    fn literal_and_default() {
        let t = table();
        let mut d = Diagnostics::default();
        assert_eq!(resolve(&FieldSpec::literal("No"), &t, 0, &mut d), "No");
        assert_eq!(resolve(&FieldSpec::column("note").or("\t"), &t, 1, &mut d), "\t");
        assert_eq!(resolve(&FieldSpec::column("missing").or("India"), &t, 0, &mut d), "India");
        assert!(d.is_clean());
    }

    #[test]
    fn values_are_escaped() {
        let t = table();
        let mut d = Diagnostics::default();
        assert_eq!(
            resolve(&FieldSpec::column("note"), &t, 0, &mut d),
            "A &amp; B &lt;c&gt;"
        );
        assert_eq!(resolve(&FieldSpec::company(), &t, 0, &mut d), "Acme &amp; Co");
    }

    #[test]
    fn dates_reformat() {
        let t = table();
        let mut d = Diagnostics::default();
        let compact = FieldSpec::column("posting_date").compact_date();
        let long = FieldSpec::column("posting_date").long_date();
        assert_eq!(resolve(&compact, &t, 0, &mut d), "20240105");
        assert_eq!(resolve(&long, &t, 0, &mut d), "5-Jan-2024");
        assert!(d.is_clean());
    }

    #[test]
    fn bad_date_is_empty_and_reported() {
        let t = table();
        let mut d = Diagnostics::default();
        let compact = FieldSpec::column("posting_date").compact_date();
        assert_eq!(resolve(&compact, &t, 1, &mut d), "");
        assert_eq!(
            d.issues(),
            [RowIssue::DateFormat {
                row: 1,
                column: "posting_date".into(),
                value: "2024-01-05".into(),
            }]
        );
    }

    #[test]
    fn sums_and_signs() {
        let t = table();
        let mut d = Diagnostics::default();
        let total = FieldSpec::sum(&["received_amount", "total_taxes_and_charges"]);
        assert_eq!(resolve(&total.clone().amount(), &t, 0, &mut d), "118.50");
        assert_eq!(resolve(&total.clone().negated(), &t, 0, &mut d), "-118.50");
        assert_eq!(resolve(&total.or("0").amount(), &t, 1, &mut d), "0");
    }

    #[test]
    fn overflowing_sum_falls_back_to_default() {
        let max = Decimal::MAX.to_string();
        let t = Table::new(
            ["received_amount", "total_taxes_and_charges"],
            vec![vec![max.as_str(), max.as_str()], vec![max.as_str(), "-1"]],
        );
        let mut d = Diagnostics::default();
        let total = FieldSpec::sum(&["received_amount", "total_taxes_and_charges"]).or("0.00");
        assert_eq!(resolve(&total.clone().amount(), &t, 0, &mut d), "0.00");
        assert_eq!(resolve(&total.clone().negated(), &t, 0, &mut d), "0.00");
        assert_eq!(
            resolve(&total.amount(), &t, 1, &mut d),
            "79228162514264337593543950334.00"
        );
        assert!(d.is_clean());
    }

    #[test]
    fn guid_and_position() {
        let t = table();
        let mut d = Diagnostics::default();
        assert_eq!(resolve(&FieldSpec::guid("-00000001"), &t, 0, &mut d), "g-1-00000001");
        assert_eq!(resolve(&FieldSpec::position(), &t, 1, &mut d), "2");
    }

    #[test]
    fn first_of_and_upper() {
        let t = table();
        let mut d = Diagnostics::default();
        let spec = FieldSpec::first_of(&["note", "name"]);
        assert_eq!(resolve(&spec, &t, 1, &mut d), "");
        assert_eq!(resolve(&FieldSpec::column("name").upper(), &t, 0, &mut d), "PE-1");
    }

    #[test]
    fn format_amount_cases() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(1500.0)), "1500.00");
        assert_eq!(format_amount(dec!(49.90)), "49.90");
        assert_eq!(format_amount(dec!(0.005)), "0.005");
        assert_eq!(format_amount(-dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(-250.5)), "-250.50");
    }

    #[test]
    fn parse_amount_tolerates_separators() {
        assert_eq!(parse_amount("1,250.75"), Some(dec!(1250.75)));
        assert_eq!(parse_amount("abc"), None);
    }
}
