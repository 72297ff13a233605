//! The tabular data a metric visualization is rendered from.

use core::fmt;

/// A single table cell.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Value {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

static NULL: Value = Value::Null;

impl Value {
    /// The numeric value of the cell, `NaN` for anything that is not a number.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(_) | Self::Null => f64::NAN,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Null)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Column {
    pub id: String,
    pub name: String,
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Rows of cells under named columns. Rows may be shorter than the column
/// list, missing cells read as `Value::Null`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// The cell at `row` and `column`, `Value::Null` if it does not exist.
    pub fn cell(&self, row: usize, column: usize) -> &Value {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion() {
        assert_eq!(Value::from(2.5).as_f64(), 2.5);
        assert!(Value::from("2.5").as_f64().is_nan());
        assert!(Value::Null.as_f64().is_nan());
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_owned()));
    }

    #[test]
    fn missing_cells() {
        let table = Table::new(vec![Column::new("a", "A"), Column::new("b", "B")])
            .with_row(vec![Value::from(1.0)]);

        assert_eq!(table.cell(0, 0), &Value::Number(1.0));
        assert_eq!(table.cell(0, 1), &Value::Null);
        assert_eq!(table.cell(1, 0), &Value::Null);
        assert_eq!(table.column(1).map(|c| c.name.as_str()), Some("B"));
        assert_eq!(table.column(2), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize() {
        let table: Table = serde_json::from_str(
            r#"{"columns":[{"id":"col-0","name":"host"},{"id":"col-1","name":"Count"}],
                "rows":[["a", 12], ["b", null]]}"#,
        )
        .unwrap();

        assert_eq!(table.cell(0, 0), &Value::from("a"));
        assert_eq!(table.cell(0, 1), &Value::Number(12.0));
        assert_eq!(table.cell(1, 1), &Value::Null);
    }
}
