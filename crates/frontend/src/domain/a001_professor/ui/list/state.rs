use std::cmp::Ordering;

use contracts::domain::a001_professor::{status_label, Matricula, ProfessorSummary};
use contracts::shared::envelope::{ListMeta, ListQuery};

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct ProfessorListState {
    pub items: Vec<ProfessorSummary>,
    pub meta: Option<ListMeta>,
    pub query: ListQuery,
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Row loaded into the form; every reload clears it
    pub selected: Option<Matricula>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ProfessorListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: None,
            query: ListQuery::default(),
            filter: String::new(),
            sort_field: "nome".to_string(),
            sort_ascending: true,
            selected: None,
            is_loading: false,
            error: None,
        }
    }
}

impl ProfessorListState {
    /// Marks a load as started; false while another one is still running
    pub fn try_begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        self.selected = None;
        true
    }

    pub fn is_selected(&self, matricula: Matricula) -> bool {
        self.selected == Some(matricula)
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    /// Pages reported by the backend, at least one
    pub fn page_count(&self) -> u32 {
        self.meta.as_ref().map(|m| m.pages).unwrap_or(1).max(1)
    }

    pub fn has_previous_page(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.query.page < self.page_count()
    }

    /// Moves to `page` when it exists; true when a reload is needed
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.page_count() || page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn finish_load(&mut self, result: Result<(Vec<ProfessorSummary>, Option<ListMeta>), String>) {
        self.is_loading = false;
        match result {
            Ok((items, meta)) => {
                // page the backend actually answered for
                if let Some(page) = meta.as_ref().map(|m| m.page).filter(|p| *p >= 1) {
                    self.query.page = page;
                }
                self.items = items;
                self.meta = meta;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Click on a header: same column flips direction, another column sorts ascending.
    /// The backend sorts across pages, so the query follows and paging restarts.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.query.order_by = order_by_param(&self.sort_field).to_string();
        self.query.order_dir = if self.sort_ascending { "asc" } else { "desc" }.to_string();
        self.query.page = 1;
    }

    pub fn visible_items(&self) -> Vec<ProfessorSummary> {
        let mut rows = filter_list(self.items.clone(), &self.filter);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    pub fn total(&self) -> u64 {
        self.meta
            .as_ref()
            .map(|m| m.total)
            .unwrap_or(self.items.len() as u64)
    }
}

/// Column key -> `order_by` accepted by the list endpoint
fn order_by_param(field: &str) -> &'static str {
    match field {
        "matricula" => "matricula",
        "status" => "status",
        _ => "nomeProfessor",
    }
}

impl Searchable for ProfessorSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matricula.to_string().contains(filter)
            || self.nome_professor.to_lowercase().contains(filter)
    }
}

impl Sortable for ProfessorSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "matricula" => self.matricula.cmp(&other.matricula),
            "status" => status_label(self.status).cmp(status_label(other.status)),
            _ => self
                .nome_professor
                .to_lowercase()
                .cmp(&other.nome_professor.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(matricula: &str, nome: &str, status: i64) -> ProfessorSummary {
        ProfessorSummary {
            matricula: Matricula::parse(matricula).unwrap(),
            nome_professor: nome.to_string(),
            status,
        }
    }

    fn loaded() -> ProfessorListState {
        let mut state = ProfessorListState::default();
        state.items = vec![
            summary("300", "carla", 1),
            summary("100", "Bruno", 0),
            summary("200", "Ana", 1),
        ];
        state
    }

    fn names(rows: &[ProfessorSummary]) -> Vec<&str> {
        rows.iter().map(|r| r.nome_professor.as_str()).collect()
    }

    #[test]
    fn test_reload_lock() {
        let mut state = ProfessorListState::default();
        assert!(state.try_begin_load());
        assert!(!state.try_begin_load());
        state.finish_load(Err("HTTP 500".into()));
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
        assert!(state.try_begin_load());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_reload_clears_selection() {
        let mut state = loaded();
        let target = Matricula::parse("200").unwrap();
        state.selected = Some(target);
        assert!(state.is_selected(target));
        assert!(state.try_begin_load());
        assert_eq!(state.selected, None);
        state.finish_load(Ok((Vec::new(), None)));
        assert!(!state.is_selected(target));
    }

    #[test]
    fn test_paging_follows_meta() {
        let mut state = loaded();
        assert_eq!(state.page_count(), 1);
        assert!(!state.go_to_page(2));

        state.meta = Some(ListMeta {
            page: 1,
            page_size: 200,
            total: 450,
            pages: 3,
            ..ListMeta::default()
        });
        assert!(!state.has_previous_page());
        assert!(state.has_next_page());
        assert!(state.go_to_page(3));
        assert_eq!(state.query.page, 3);
        assert!(!state.has_next_page());
        assert!(!state.go_to_page(4));
        assert!(!state.go_to_page(3));
        assert!(state.go_to_page(2));
        assert!(state.has_previous_page());
    }

    #[test]
    fn test_sort_goes_to_query_and_restarts_paging() {
        let mut state = loaded();
        state.query.page = 2;
        state.toggle_sort("status");
        assert_eq!(state.query.order_by, "status");
        assert_eq!(state.query.order_dir, "asc");
        assert_eq!(state.query.page, 1);
        state.toggle_sort("status");
        assert_eq!(state.query.order_dir, "desc");
        state.toggle_sort("nome");
        assert_eq!(state.query.order_by, "nomeProfessor");
    }

    #[test]
    fn test_default_sort_is_name_ignoring_case() {
        let state = loaded();
        assert_eq!(names(&state.visible_items()), vec!["Ana", "Bruno", "carla"]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = loaded();
        state.toggle_sort("matricula");
        assert_eq!(names(&state.visible_items()), vec!["Bruno", "Ana", "carla"]);
        state.toggle_sort("matricula");
        assert!(!state.sort_ascending);
        assert_eq!(names(&state.visible_items()), vec!["carla", "Ana", "Bruno"]);
    }

    #[test]
    fn test_filter_by_name_or_matricula() {
        let mut state = loaded();
        state.filter = "AR".into();
        assert_eq!(names(&state.visible_items()), vec!["carla"]);
        state.filter = "20".into();
        assert_eq!(names(&state.visible_items()), vec!["Ana"]);
        // a single character does not filter yet
        state.filter = "z".into();
        assert_eq!(state.visible_items().len(), 3);
    }

    #[test]
    fn test_total_prefers_meta() {
        let mut state = loaded();
        assert_eq!(state.total(), 3);
        state.meta = Some(ListMeta {
            total: 42,
            ..ListMeta::default()
        });
        assert_eq!(state.total(), 42);
    }
}
