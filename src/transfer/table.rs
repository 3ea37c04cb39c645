use csv::QuoteStyle;
use serde_json::Value;

use crate::scoring::Section;

/// Writes a table the way scouting exports look: a plain header line, then
/// every data field quoted. No rows, no output.
pub fn write_table<I>(columns: &[&str], rows: I) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        return Ok(String::new());
    }

    let mut header = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    header.write_record(columns)?;
    let buffer = header
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;

    let mut body = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(buffer);
    for row in rows {
        body.write_record(&row)?;
    }

    let bytes = body
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Rows read from an import, plus a `"Row N: reason"` line per rejected row.
#[derive(Debug)]
pub struct ParsedImport<T> {
    pub rows: Vec<T>,
    pub errors: Vec<String>,
}

impl<T> Default for ParsedImport<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Reads every data row with `read_row`, collecting failures by 1-based row number.
pub fn parse_rows<T>(
    text: &str,
    read_row: impl Fn(&Columns<'_>, &csv::StringRecord) -> Result<T, String>,
) -> Result<ParsedImport<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let columns = Columns { headers: &headers };
    let mut parsed = ParsedImport::default();

    for (index, row) in reader.records().enumerate() {
        let row = row
            .map_err(|err| err.to_string())
            .and_then(|row| read_row(&columns, &row));

        match row {
            Ok(row) => parsed.rows.push(row),
            Err(reason) => parsed.errors.push(format!("Row {}: {}", index + 1, reason)),
        }
    }

    Ok(parsed)
}

/// Header lookup for one import.
pub struct Columns<'a> {
    headers: &'a csv::StringRecord,
}

impl Columns<'_> {
    pub fn cell<'r>(&self, row: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        let position = self.headers.iter().position(|header| header == column)?;
        row.get(position)
    }

    /// The row's `id`. It must be positive and leave room for the ids handed
    /// out after it.
    pub fn id(&self, row: &csv::StringRecord) -> Result<i64, String> {
        let id = self
            .cell(row, "id")
            .ok_or_else(|| "missing id".to_string())?
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid id: {err}"))?;

        if id <= 0 || id == i64::MAX {
            return Err(format!("id {id} out of range"));
        }
        Ok(id)
    }

    /// A non-empty text cell.
    pub fn text(&self, row: &csv::StringRecord, column: &str) -> Option<String> {
        self.cell(row, column)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }

    /// A JSON object cell. Empty cells and non-object JSON read as `{}`.
    pub fn section(&self, row: &csv::StringRecord, column: &str) -> Result<Section, String> {
        let cell = self.cell(row, column).unwrap_or_default();
        if cell.is_empty() {
            return Ok(Section::new());
        }

        match serde_json::from_str::<Value>(cell) {
            Ok(Value::Object(section)) => Ok(section),
            Ok(_) => Ok(Section::new()),
            Err(err) => Err(format!("{column}: {err}")),
        }
    }
}
