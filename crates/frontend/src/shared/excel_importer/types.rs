use std::future::Future;

use super::error::ImportError;

/// Value of one spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Trimmed text form. Numbers use the shortest round-trip representation,
    /// so `1001.0` reads as `"1001"` and `12.5` as `"12.5"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Read access to one worksheet, zero-based coordinates
pub trait SheetSource {
    /// First column of the declared range
    fn first_col(&self) -> u32;
    /// Last row of the declared range, `None` for a sheet without range
    fn last_row(&self) -> Option<u32>;
    fn cell(&self, col: u32, row: u32) -> CellValue;
}

pub trait WorkbookSource {
    type Sheet: SheetSource;

    fn sheet_names(&self) -> Vec<String>;
    fn sheet(&self, name: &str) -> Option<Self::Sheet>;
}

/// Spreadsheet capability: make sure it is available, then decode bytes
pub trait SpreadsheetEngine {
    type Workbook: WorkbookSource;

    fn ensure_loaded(&self) -> impl Future<Output = Result<(), ImportError>>;
    fn read(&self, bytes: &[u8]) -> Result<Self::Workbook, ImportError>;
}

/// A user-selected file
pub trait FileSource {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn bytes(&self) -> impl Future<Output = Result<Vec<u8>, ImportError>>;
}

/// Fixed layout of an import template
#[derive(Debug, Clone, Copy)]
pub struct SheetTemplate {
    /// Compared ignoring ASCII case
    pub sheet_name: &'static str,
    pub header_row: u32,
    pub first_data_row: u32,
    pub headers: &'static [&'static str],
    pub max_rows: usize,
}

impl SheetTemplate {
    pub fn width(&self) -> u32 {
        self.headers.len() as u32
    }
}

/// Trimmed values of one populated data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based, as shown by spreadsheet software
    pub row_number: u32,
    pub values: Vec<String>,
}

impl RawRow {
    pub fn get(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRows {
    pub rows: Vec<RawRow>,
    /// Populated rows past `max_rows`, left unprocessed
    pub rows_beyond_limit: usize,
}

/// Column letter for a zero-based index: 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letter(mut idx: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Zero-based column index for a letter sequence: A -> 0, AA -> 26
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut idx: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let v = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        idx = idx.checked_mul(26)?.checked_add(v)?;
    }
    Some(idx - 1)
}

/// Cell address like `B13` for zero-based coordinates
pub fn cell_address(col: u32, row: u32) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Declared range of a sheet (`!ref`, e.g. `A1:L215`), zero-based inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_col: u32,
    pub start_row: u32,
    pub end_col: u32,
    pub end_row: u32,
}

impl CellRange {
    pub fn parse(reference: &str) -> Option<Self> {
        let (start, end) = match reference.split_once(':') {
            Some((s, e)) => (s, e),
            None => (reference, reference),
        };
        let (start_col, start_row) = parse_address(start)?;
        let (end_col, end_row) = parse_address(end)?;
        Some(Self {
            start_col,
            start_row,
            end_col,
            end_row,
        })
    }
}

fn parse_address(addr: &str) -> Option<(u32, u32)> {
    let addr = addr.trim().replace('$', "");
    let split = addr.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = addr.split_at(split);
    let col = column_index(letters)?;
    let row: u32 = digits.parse().ok()?;
    Some((col, row.checked_sub(1)?))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(11), "L");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
        assert_eq!(column_index("aa"), Some(26));
        assert_eq!(column_index("ZZ"), Some(701));
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(1, 12), "B13");
    }

    #[test]
    fn test_range_parse() {
        assert_eq!(
            CellRange::parse("A1:L215"),
            Some(CellRange {
                start_col: 0,
                start_row: 0,
                end_col: 11,
                end_row: 214
            })
        );
        assert_eq!(
            CellRange::parse("$C$4"),
            Some(CellRange {
                start_col: 2,
                start_row: 3,
                end_col: 2,
                end_row: 3
            })
        );
        assert_eq!(CellRange::parse("A0:B2"), None);
        assert_eq!(CellRange::parse(""), None);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(CellValue::Number(1001.0).to_text(), "1001");
        assert_eq!(CellValue::Number(12.5).to_text(), "12.5");
        assert_eq!(CellValue::Text("  Ana ".into()).to_text(), "Ana");
        assert_eq!(CellValue::Bool(true).to_text(), "true");
        assert_eq!(CellValue::Empty.to_text(), "");
    }
}
