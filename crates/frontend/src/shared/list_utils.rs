/// Search and sort helpers shared by list pages
use leptos::prelude::*;
use std::cmp::Ordering;

/// Minimum filter length before the search kicks in
pub const MIN_FILTER_LEN: usize = 2;

pub trait Searchable {
    /// Case-insensitive match of the filter against the searchable fields
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

fn filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_active(filter) {
        return items;
    }
    let needle = filter.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Sort indicator for a table header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search box with a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por matrícula ou nome...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || filter_active(&value.get())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Limpar"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: u32,
        name: &'static str,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(filter) || self.code.to_string().contains(filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "code" => self.code.cmp(&other.code),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { code: 30, name: "Carla" },
            Row { code: 10, name: "Ana" },
            Row { code: 20, name: "Bruno" },
        ]
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "code", true);
        assert_eq!(items.iter().map(|r| r.code).collect::<Vec<_>>(), vec![10, 20, 30]);
        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, "Carla");
    }

    #[test]
    fn test_filter_list_needs_min_length() {
        assert_eq!(filter_list(rows(), "a").len(), 3);
        let found = filter_list(rows(), " BRU ");
        assert_eq!(found, vec![Row { code: 20, name: "Bruno" }]);
        assert_eq!(filter_list(rows(), "10").len(), 1);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("code", "code", true), " ▲");
        assert_eq!(get_sort_indicator("code", "code", false), " ▼");
        assert_eq!(get_sort_indicator("code", "name", true), " ⇅");
    }
}
