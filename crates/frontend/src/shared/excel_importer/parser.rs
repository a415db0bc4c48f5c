//! Template-driven reading of a worksheet: sheet lookup, header check and
//! row extraction. Works on any [`SheetSource`].

use super::error::ImportError;
use super::types::*;

/// First sheet whose name equals the template name ignoring ASCII case
pub fn find_sheet<W: WorkbookSource>(
    workbook: &W,
    template: &SheetTemplate,
) -> Result<W::Sheet, ImportError> {
    let names = workbook.sheet_names();
    names
        .iter()
        .find(|n| n.eq_ignore_ascii_case(template.sheet_name))
        .and_then(|n| workbook.sheet(n))
        .ok_or_else(|| ImportError::SheetNotFound {
            expected: template.sheet_name.to_string(),
            available: if names.is_empty() {
                "(nenhuma)".to_string()
            } else {
                names.join(", ")
            },
        })
}

fn read_row<S: SheetSource>(sheet: &S, template: &SheetTemplate, row: u32) -> Vec<String> {
    let first = sheet.first_col();
    (0..template.width())
        .map(|offset| sheet.cell(first + offset, row).to_text())
        .collect()
}

/// Literal header row as read from the sheet
pub fn read_header<S: SheetSource>(sheet: &S, template: &SheetTemplate) -> Vec<String> {
    read_row(sheet, template, template.header_row)
}

/// Exact positional comparison of the header row against the template
pub fn validate_header<S: SheetSource>(
    sheet: &S,
    template: &SheetTemplate,
) -> Result<(), ImportError> {
    let found = read_header(sheet, template);
    let mismatch = template
        .headers
        .iter()
        .zip(found.iter())
        .position(|(expected, got)| *expected != got.as_str());

    match mismatch {
        None => Ok(()),
        Some(idx) => {
            log::error!("Cabeçalho inválido: {:?}", found);
            Err(ImportError::HeaderMismatch {
                row_number: template.header_row + 1,
                column: column_letter(sheet.first_col() + idx as u32),
                expected: template.headers[idx].to_string(),
                found: found[idx].clone(),
                header: found.join(" | "),
            })
        }
    }
}

/// Populated data rows, at most `max_rows`; the rest are only counted
pub fn extract_rows<S: SheetSource>(sheet: &S, template: &SheetTemplate) -> ExtractedRows {
    let mut extracted = ExtractedRows::default();
    let Some(last_row) = sheet.last_row() else {
        return extracted;
    };

    for row in template.first_data_row..=last_row {
        let values = read_row(sheet, template, row);
        if values.iter().all(String::is_empty) {
            continue;
        }
        if extracted.rows.len() < template.max_rows {
            extracted.rows.push(RawRow {
                row_number: row + 1,
                values,
            });
        } else {
            extracted.rows_beyond_limit += 1;
        }
    }

    if extracted.rows_beyond_limit > 0 {
        log::warn!(
            "{} linha(s) além do limite de {} não foram processadas",
            extracted.rows_beyond_limit,
            template.max_rows
        );
    }
    extracted
}
