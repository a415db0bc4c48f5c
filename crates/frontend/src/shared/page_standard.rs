//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_professor--list"`) and a `data-page-category` taken from the
//! constants below.

/// Records table plus the edit form.
pub const PAGE_CAT_LIST: &str = "list";

/// Landing page with shortcuts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page (spreadsheet import).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Login and other system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => {
            !entity.is_empty()
                && [PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_USECASE, PAGE_CAT_SYSTEM]
                    .contains(&category)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_professor--list"));
        assert!(is_valid_page_id("a001_professor_import--usecase"));
        assert!(is_valid_page_id("sys_login--system"));
        assert!(!is_valid_page_id("a001_professor"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("dashboard--chart"));
    }
}
