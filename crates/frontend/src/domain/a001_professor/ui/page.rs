use contracts::domain::a001_professor::Matricula;
use leptos::prelude::*;

use super::details::{ProfessorDetails, ProfessorDetailsViewModel};
use super::list::{load_professores, ProfessorList, ProfessorListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Registration form on top, professor list below
#[component]
pub fn ProfessorRegistryPage() -> impl IntoView {
    let details = ProfessorDetailsViewModel::new();
    let list = RwSignal::new(ProfessorListState::default());

    load_professores(list);

    // A reload ends the edit: the form no longer targets the old row
    let reload = Callback::new(move |_: ()| {
        details.reset();
        load_professores(list);
    });
    // The highlighted row is the record the form targets
    Effect::new(move |_| {
        let target = details.selected.get();
        list.update(|s| s.selected = target);
    });
    let on_select = Callback::new(move |matricula: Matricula| details.select(matricula));

    view! {
        <PageFrame page_id="a001_professor--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>"Cadastro de Professores"</h2>
            </div>
            <ProfessorDetails vm=details on_changed=reload />
            <ProfessorList state=list on_select=on_select on_reload=reload />
        </PageFrame>
    }
}
