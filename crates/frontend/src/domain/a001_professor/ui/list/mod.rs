mod state;

pub use state::ProfessorListState;

use contracts::domain::a001_professor::{status_label, Matricula};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_professor::api::fetch_professores;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};

/// Fetch the list unless a load is already running
pub fn load_professores(state: RwSignal<ProfessorListState>) {
    let mut started = false;
    state.update(|s| started = s.try_begin_load());
    if !started {
        log::debug!("Lista de professores já está carregando");
        return;
    }
    let query = state.with_untracked(|s| s.query.clone());
    spawn_local(async move {
        let result = fetch_professores(&query)
            .await
            .map(|env| (env.dados, env.meta));
        if let Err(e) = &result {
            log::error!("Falha ao carregar professores: {}", e);
        }
        state.update(|s| s.finish_load(result));
    });
}

/// Table of the current page. Sorting, paging and refresh change the query
/// and go through `on_reload`, which also drops the form selection.
#[component]
pub fn ProfessorList(
    state: RwSignal<ProfessorListState>,
    #[prop(into)] on_select: Callback<Matricula>,
    #[prop(into)] on_reload: Callback<()>,
) -> impl IntoView {
    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="sortable"
                on:click=move |_| {
                    state.update(|s| s.toggle_sort(field));
                    on_reload.run(());
                }
            >
                {label}
                {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
            </th>
        }
    };

    let go_to = move |delta: i64| {
        let mut changed = false;
        state.update(|s| {
            let target = (s.page() as i64 + delta).max(1) as u32;
            changed = s.go_to_page(target);
        });
        if changed {
            on_reload.run(());
        }
    };

    let is_loading = move || state.with(|s| s.is_loading);

    view! {
        <div class="list-container professor-list">
            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter.clone()))
                    on_change=Callback::new(move |v: String| state.update(|s| s.filter = v))
                />
                <Button
                    disabled=Signal::derive(is_loading)
                    on_click=move |_| on_reload.run(())
                >
                    {icon("refresh")}
                    " Atualizar"
                </Button>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || format!("{} professor(es)", state.with(|s| s.total()))}
                </Badge>
                <Show when=is_loading>
                    <Spinner />
                </Show>
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div>{e}</div>
                </MessageBar>
            })}

            <table class="data-table">
                <thead>
                    <tr>
                        {header("matricula", "Matrícula")}
                        {header("nome", "Nome")}
                        {header("status", "Situação")}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.visible_items())
                        key=|p| p.matricula
                        children=move |p| {
                            let matricula = p.matricula;
                            view! {
                                <tr
                                    class="clickable"
                                    class:selected=move || state.with(|s| s.is_selected(matricula))
                                    on:click=move |_| on_select.run(matricula)
                                >
                                    <td>{matricula.to_string()}</td>
                                    <td>{p.nome_professor.clone()}</td>
                                    <td>{status_label(p.status)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="list-pager">
                <Space gap=SpaceGap::Small>
                    <Button
                        disabled=Signal::derive(move || is_loading() || !state.with(|s| s.has_previous_page()))
                        on_click=move |_| go_to(-1)
                    >
                        "Anterior"
                    </Button>
                    <span class="list-pager__info">
                        {move || state.with(|s| format!("Página {} de {}", s.page(), s.page_count()))}
                    </span>
                    <Button
                        disabled=Signal::derive(move || is_loading() || !state.with(|s| s.has_next_page()))
                        on_click=move |_| go_to(1)
                    >
                        "Próxima"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
