//! Client-side checks run as soon as a file is picked.

use super::error::ImportError;
use crate::shared::format::format_bytes;

pub const ALLOWED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// `accept` attribute of the file input
pub fn accept_attribute() -> String {
    ALLOWED_EXTENSIONS.join(",")
}

fn has_allowed_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Accepts the file or explains why not. On success returns the info line
/// shown next to the picker.
pub fn check_file(name: &str, size: u64) -> Result<String, ImportError> {
    if !has_allowed_extension(name) {
        return Err(ImportError::InputRejected(format!(
            "O arquivo \"{}\" não é uma planilha Excel. Selecione um arquivo {}.",
            name,
            ALLOWED_EXTENSIONS.join(" ou ")
        )));
    }
    if size > MAX_FILE_SIZE {
        let (mut actual, mut limit) = (format_bytes(size), format_bytes(MAX_FILE_SIZE));
        // Rounding can make both read "10 MB"
        if actual == limit {
            actual = format!("{} bytes", size);
            limit = format!("{} bytes", MAX_FILE_SIZE);
        }
        return Err(ImportError::InputRejected(format!(
            "O arquivo \"{}\" tem {} e excede o limite de {}.",
            name, actual, limit
        )));
    }
    Ok(format!("Selecionado: {} ({})", name, format_bytes(size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert!(check_file("docentes.xlsx", 1000).is_ok());
        assert!(check_file("DOCENTES.XLS", 1000).is_ok());
        assert!(matches!(
            check_file("docentes.csv", 1000),
            Err(ImportError::InputRejected(_))
        ));
        assert!(check_file("xlsx", 10).is_err());
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        assert_eq!(
            check_file("a.xlsx", MAX_FILE_SIZE).unwrap(),
            "Selecionado: a.xlsx (10 MB)"
        );
        let err = check_file("a.xlsx", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(err.to_string().contains("a.xlsx"));
        assert!(err
            .to_string()
            .contains("tem 10485761 bytes e excede o limite de 10485760 bytes"));
    }

    #[test]
    fn test_oversize_message_uses_units_when_distinct() {
        let err = check_file("grande.xlsx", 25 * 1024 * 1024).unwrap_err();
        assert!(err
            .to_string()
            .contains("tem 25 MB e excede o limite de 10 MB"));
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".xlsx,.xls");
    }
}
