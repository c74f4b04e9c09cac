//! In-memory table model: ordered rows over a shared, trimmed column set.

/// An ordered sequence of rows sharing one column set.
///
/// Row order is document order: it becomes the order of primary records in
/// the output and, for journal entries, defines grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from column names and raw cell values.
    ///
    /// Column names are trimmed. Rows shorter than the header are treated as
    /// absent in the missing positions; extra cells are ignored.
    pub fn new<C, R, V>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if `column` is part of the header.
    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// The row at `index`, if any.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.rows.len()).then_some(Row { table: self, index })
    }

    /// All rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.rows.len()).map(move |index| Row { table: self, index })
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    /// 0-based position of the row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position of the row, as stamped into ALTERID-style fields.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// The trimmed value of `column`, or `None` when absent.
    ///
    /// A missing column, an empty (or whitespace-only) cell and the token
    /// `nan` in any case are all treated as absent.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.table.column_index(column)?;
        let value = self.table.rows[self.index].get(idx)?.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            None
        } else {
            Some(value)
        }
    }

    /// True if `column` holds a present value.
    pub fn has(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// The raw cell text of `column` without absence rules applied.
    pub fn raw(&self, column: &str) -> Option<&'a str> {
        let idx = self.table.column_index(column)?;
        self.table.rows[self.index].get(idx).map(String::as_str)
    }
}
