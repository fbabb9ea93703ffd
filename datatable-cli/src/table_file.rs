//! JSON table files.
//!
//! A table file describes the columns, the rows and the view defaults:
//!
//! ```json
//! {
//!   "columns": [
//!     { "field": "name", "header": "Name" },
//!     { "field": "salary", "header": "Salary", "kind": "decimal" },
//!     { "field": "id", "header": "Contact", "ignore_filtering": true,
//!       "template": "{name} <{email}>" }
//!   ],
//!   "rows": [ { "id": 1, "name": "Al", "email": "al@example.com", "salary": "5200.50" } ],
//!   "page_size": 10,
//!   "initial_sort": { "field": "salary", "order": "desc" }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use datatable_lib::model::Column;
use datatable_lib::model::Row;
use datatable_lib::model::Value;
use datatable_lib::query::PageSize;
use datatable_lib::query::SortState;
use datatable_lib::view::TableConfig;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CliError;
use crate::template::Template;

/// How raw JSON cells of a column are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Keep the JSON value as is.
    #[default]
    Auto,
    String,
    Int,
    Float,
    Decimal,
    #[serde(alias = "date")]
    DateTime,
    Bool,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Auto => "auto",
            ColumnKind::String => "string",
            ColumnKind::Int => "int",
            ColumnKind::Float => "float",
            ColumnKind::Decimal => "decimal",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

impl ColumnKind {
    /// Converts a raw JSON cell. `None` means the value does not fit.
    pub fn coerce(self, raw: serde_json::Value) -> Option<Value> {
        use serde_json::Value as Json;

        if raw.is_null() {
            return Some(Value::Null);
        }
        match (self, raw) {
            (ColumnKind::Auto, raw) => Some(Value::from(raw)),
            (ColumnKind::String, Json::String(s)) => Some(Value::String(s)),
            (ColumnKind::String, raw) => Some(Value::String(raw.to_string())),
            (ColumnKind::Int, Json::Number(n)) => n.as_i64().map(Value::Int),
            (ColumnKind::Int, Json::String(s)) => s.trim().parse().ok().map(Value::Int),
            (ColumnKind::Float, Json::Number(n)) => n.as_f64().map(Value::Float),
            (ColumnKind::Float, Json::String(s)) => s.trim().parse().ok().map(Value::Float),
            (ColumnKind::Decimal, Json::Number(n)) => {
                Decimal::from_str(&n.to_string()).ok().map(Value::Decimal)
            }
            (ColumnKind::Decimal, Json::String(s)) => {
                Decimal::from_str(s.trim()).ok().map(Value::Decimal)
            }
            (ColumnKind::DateTime, Json::String(s)) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc))),
            (ColumnKind::Bool, Json::Bool(b)) => Some(Value::Bool(b)),
            (ColumnKind::Bool, Json::String(s)) => match s.trim() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A column entry in a table file.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSpec {
    pub field: String,
    /// Defaults to the field name.
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub ignore_filtering: bool,
    #[serde(default)]
    pub kind: ColumnKind,
    /// Cell template; replaces the field's text when set.
    #[serde(default)]
    pub template: Option<String>,
}

impl ColumnSpec {
    fn to_column(&self) -> Column {
        let header = self.header.clone().unwrap_or_else(|| self.field.clone());
        let mut column = Column::new(&self.field, header);
        if self.ignore_filtering {
            column = column.ignore_filtering();
        }
        if let Some(source) = &self.template {
            let template = Template::parse(source);
            column = column.with_cell(move |row| template.render(row));
        }
        column
    }
}

/// A parsed table file.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
    /// Rows per page; absent means the default. `0` is rejected when the
    /// table is built.
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Show every row on one page.
    #[serde(default)]
    pub unpaginated: bool,
    #[serde(default = "default_enable_search")]
    pub enable_search: bool,
    #[serde(default)]
    pub initial_sort: Option<SortState>,
}

fn default_enable_search() -> bool {
    true
}

impl TableFile {
    /// Reads and parses a table file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadTable {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_json(&text)?;
        log::info!(
            "[table_file] loaded {} columns, {} rows from {}",
            file.columns.len(),
            file.rows.len(),
            path.display()
        );
        Ok(file)
    }

    /// Parses a table file from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.check_templates();
        self.columns.iter().map(ColumnSpec::to_column).collect()
    }

    /// Warns about template placeholders no row provides.
    fn check_templates(&self) {
        for spec in &self.columns {
            let Some(source) = &spec.template else {
                continue;
            };
            for field in Template::parse(source).fields() {
                if !self.rows.iter().any(|row| row.contains_key(field)) {
                    log::warn!(
                        "[table_file] column '{}' template reads '{}', which no row has",
                        spec.field,
                        field
                    );
                }
            }
        }
    }

    /// Converts raw rows, coercing cells of typed columns.
    pub fn rows(&self) -> Result<Vec<Row>, CliError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, raw)| -> Result<Row, CliError> {
                let mut row = Row::from(raw.clone());
                for spec in self.columns.iter().filter(|c| c.kind != ColumnKind::Auto) {
                    if let Some(cell) = raw.get(&spec.field) {
                        let value = spec.kind.coerce(cell.clone()).ok_or_else(|| {
                            CliError::invalid_cell(index + 1, &spec.field, spec.kind, cell)
                        })?;
                        row.insert(&spec.field, value);
                    }
                }
                Ok(row)
            })
            .collect()
    }

    /// Page size from the file settings.
    pub fn page_size(&self) -> PageSize {
        if self.unpaginated {
            return PageSize::Unbounded;
        }
        self.page_size.map(PageSize::Fixed).unwrap_or_default()
    }

    /// Builds a table config without a target.
    pub fn into_config<R>(self) -> Result<TableConfig<R>, CliError> {
        let mut config = TableConfig::new()
            .with_columns(self.columns())
            .with_rows(self.rows()?)
            .with_search(self.enable_search)
            .with_page_size(self.page_size());
        if let Some(sort) = self.initial_sort {
            config = config.with_initial_sort(sort);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatable_lib::query::Direction;

    const PEOPLE: &str = r#"{
        "columns": [
            { "field": "name", "header": "Name" },
            { "field": "salary", "kind": "decimal" },
            { "field": "joined", "kind": "datetime" },
            { "field": "email", "ignore_filtering": true, "template": "<{email}>" }
        ],
        "rows": [
            { "name": "Al", "salary": "5200.50", "joined": "2021-03-01T00:00:00Z", "email": "al@x.io" },
            { "name": "Bo", "salary": 4100, "joined": null }
        ],
        "page_size": 10,
        "initial_sort": { "field": "salary", "order": "desc" }
    }"#;

    #[test]
    fn test_parse_file() {
        let file = TableFile::from_json(PEOPLE).unwrap();
        assert_eq!(file.columns.len(), 4);
        assert_eq!(file.page_size(), PageSize::Fixed(10));
        assert!(file.enable_search);
        assert_eq!(file.initial_sort, Some(SortState::new("salary", Direction::Desc)));
    }

    #[test]
    fn test_columns() {
        let columns = TableFile::from_json(PEOPLE).unwrap().columns();
        assert_eq!(columns[0].header, "Name");
        assert_eq!(columns[1].header, "salary");
        assert!(columns[3].ignore_filtering);

        let render = columns[3].cell_renderer().unwrap();
        assert_eq!(render(&Row::new().set("email", "a@b.c")), "<a@b.c>");
    }

    #[test]
    fn test_rows_are_coerced() {
        let rows = TableFile::from_json(PEOPLE).unwrap().rows().unwrap();
        assert_eq!(rows[0].value("salary"), &Value::Decimal(Decimal::new(520050, 2)));
        assert_eq!(rows[1].value("salary"), &Value::Decimal(Decimal::from(4100)));
        assert_eq!(rows[0].value("joined").type_name(), "datetime");
        assert!(rows[1].value("joined").is_null());
    }

    #[test]
    fn test_invalid_cell() {
        let text = r#"{
            "columns": [{ "field": "age", "kind": "int" }],
            "rows": [{ "age": 3 }, { "age": "three" }]
        }"#;
        let err = TableFile::from_json(text).unwrap().rows().unwrap_err();
        match err {
            CliError::InvalidCell { row, field, kind, .. } => {
                assert_eq!(row, 2);
                assert_eq!(field, "age");
                assert_eq!(kind, ColumnKind::Int);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let file = TableFile::from_json(r#"{ "columns": [{ "field": "a" }] }"#).unwrap();
        assert!(file.rows.is_empty());
        assert_eq!(file.page_size(), PageSize::Fixed(3));
        assert!(file.initial_sort.is_none());
    }

    #[test]
    fn test_unpaginated() {
        let file =
            TableFile::from_json(r#"{ "columns": [{ "field": "a" }], "unpaginated": true }"#)
                .unwrap();
        assert_eq!(file.page_size(), PageSize::Unbounded);
    }

    #[test]
    fn test_bundled_people_file() {
        use datatable_lib::view::DataTable;
        use datatable_lib::view::RenderDescriptor;

        let file = TableFile::from_json(include_str!("../data/people.json")).unwrap();
        let mut pages = Vec::new();
        let config = file
            .into_config()
            .unwrap()
            .with_target(|view: &RenderDescriptor| pages.push(view.footer.caption()));
        let mut table = DataTable::new(config).unwrap();
        table.on_header_activate("salary");
        table.on_header_activate("salary");
        assert_eq!(table.rows()[0].value("name"), &Value::from("Flo"));
        drop(table);
        assert_eq!(pages.last().unwrap(), "Showing 1 to 3 of 7 items");
    }

    #[test]
    fn test_coerce() {
        use serde_json::json;
        assert_eq!(ColumnKind::Int.coerce(json!("42")), Some(Value::Int(42)));
        assert_eq!(ColumnKind::Float.coerce(json!(2)), Some(Value::Float(2.0)));
        assert_eq!(ColumnKind::Bool.coerce(json!("true")), Some(Value::Bool(true)));
        assert_eq!(ColumnKind::Bool.coerce(json!(1)), None);
        assert_eq!(ColumnKind::String.coerce(json!(7)), Some(Value::from("7")));
        assert_eq!(ColumnKind::DateTime.coerce(json!("yesterday")), None);
        assert_eq!(ColumnKind::Auto.coerce(json!(null)), Some(Value::Null));
    }
}
