use leptos::prelude::*;
use thaw::*;

use super::view_model::{ProfessorDetailsViewModel, ProfessorForm};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::notify::AlertArea;

/// Text input bound to one field of the form
fn form_field(
    vm: ProfessorDetailsViewModel,
    id: &'static str,
    label: &'static str,
    get: fn(&ProfessorForm) -> String,
    set: fn(&mut ProfessorForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn ProfessorDetails(
    vm: ProfessorDetailsViewModel,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let busy = move || vm.saving.get();

    view! {
        <div class="details-container professor-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar professor" } else { "Novo professor" }}
                </h3>
                {move || {
                    vm.form
                        .get()
                        .data_inclusao
                        .map(|d| view! { <span class="details-meta">{format!("Incluído em {}", format_datetime(&d))}</span> })
                }}
            </div>

            <AlertArea notice=vm.notice />

            <div class="details-form">
                <div class="form-group">
                    <label for="matricula">"Matrícula"</label>
                    <input
                        type="text"
                        id="matricula"
                        inputmode="numeric"
                        prop:value=move || vm.form.get().matricula
                        prop:disabled=move || vm.is_edit_mode()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.matricula = value);
                        }
                    />
                </div>
                {form_field(vm, "nome_professor", "Nome do Professor", |f| f.nome_professor.clone(), |f, v| f.nome_professor = v)}
                <div class="form-group">
                    <label for="status_situacao">"Situação"</label>
                    <select
                        id="status_situacao"
                        prop:value=move || vm.form.get().status_situacao
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.status_situacao = value);
                        }
                    >
                        <option value="1">"Ativo"</option>
                        <option value="0">"Inativo"</option>
                    </select>
                </div>
                {form_field(vm, "regime_juridico", "Regime Jurídico", |f| f.regime_juridico.clone(), |f, v| f.regime_juridico = v)}
                {form_field(vm, "carga_horaria", "Carga Horária", |f| f.carga_horaria.clone(), |f, v| f.carga_horaria = v)}
                {form_field(vm, "hora_atividade", "Hora Atividade", |f| f.hora_atividade.clone(), |f, v| f.hora_atividade = v)}
                {form_field(vm, "hae_o", "HAE-o", |f| f.hae_o.clone(), |f, v| f.hae_o = v)}
                {form_field(vm, "hae_c", "HAE-c", |f| f.hae_c.clone(), |f, v| f.hae_c = v)}
                {form_field(vm, "obs_manha", "Observação Manhã", |f| f.obs_manha.clone(), |f, v| f.obs_manha = v)}
                {form_field(vm, "obs_tarde", "Observação Tarde", |f| f.obs_tarde.clone(), |f, v| f.obs_tarde = v)}
                {form_field(vm, "obs_noite", "Observação Noite", |f| f.obs_noite.clone(), |f, v| f.obs_noite = v)}
            </div>

            <div class="details-actions">
                <Space gap=SpaceGap::Small>
                    <Show
                        when=move || vm.is_edit_mode()
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(busy)
                                on_click=move |_| vm.create_command(on_changed)
                            >
                                {icon("plus")}
                                " Cadastrar"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(busy)
                            on_click=move |_| vm.update_command(on_changed)
                        >
                            {icon("save")}
                            " Salvar"
                        </Button>
                        <Button
                            disabled=Signal::derive(busy)
                            on_click=move |_| vm.delete_command(on_changed)
                        >
                            {icon("trash")}
                            " Excluir"
                        </Button>
                    </Show>
                    <Button on_click=move |_| vm.reset()>
                        {icon("x")}
                        " Limpar"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
