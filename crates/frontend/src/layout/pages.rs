//! Page registry: every page reachable from the sidebar, by key.

use leptos::prelude::*;

use crate::domain::a001_professor::ui::bulk_import::ProfessorBulkImportPage;
use crate::domain::a001_professor::ui::page::ProfessorRegistryPage;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;

pub const PAGE_QUERY_KEY: &str = "active";

pub const PAGE_DASHBOARD: &str = "dashboard";
pub const PAGE_PROFESSOR: &str = "a001_professor";
pub const PAGE_PROFESSOR_IMPORT: &str = "a001_professor_import";

pub const DEFAULT_PAGE: &str = PAGE_DASHBOARD;

/// (key, title, icon) in sidebar order
pub const PAGES: &[(&str, &str, &str)] = &[
    (PAGE_DASHBOARD, "Início", "home"),
    (PAGE_PROFESSOR, "Professores", "users"),
    (PAGE_PROFESSOR_IMPORT, "Importar planilha", "upload"),
];

pub fn page_title(key: &str) -> &'static str {
    PAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, title, _)| *title)
        .unwrap_or("Página")
}

pub fn render_page(key: &str) -> AnyView {
    match key {
        PAGE_DASHBOARD => view! { <DashboardPage /> }.into_any(),
        PAGE_PROFESSOR => view! {
            <RequireAuth>
                <ProfessorRegistryPage />
            </RequireAuth>
        }
        .into_any(),
        PAGE_PROFESSOR_IMPORT => view! {
            <RequireAuth>
                <ProfessorBulkImportPage />
            </RequireAuth>
        }
        .into_any(),
        other => {
            log::warn!("Página desconhecida: {}", other);
            let key = other.to_string();
            view! {
                <div class="page page--placeholder">
                    <h2>"Página não implementada"</h2>
                    <p>{format!("Nenhuma página registrada para \"{}\".", key)}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles() {
        assert_eq!(page_title(PAGE_PROFESSOR_IMPORT), "Importar planilha");
        assert_eq!(page_title("nope"), "Página");
    }
}
