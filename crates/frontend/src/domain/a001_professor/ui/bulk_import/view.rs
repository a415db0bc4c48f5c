use contracts::domain::a001_professor::ImportResponse;
use leptos::prelude::*;
use thaw::*;

use super::view_model::BulkImportViewModel;
use crate::domain::a001_professor::import::template::{HEADERS, PROFESSOR_TEMPLATE};
use crate::shared::excel_importer::file_gate::ALLOWED_EXTENSIONS;
use crate::shared::excel_importer::SpreadsheetPicker;
use crate::shared::icons::icon;
use crate::shared::notify::AlertArea;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

fn template_instructions() -> impl IntoView {
    let t = PROFESSOR_TEMPLATE;
    view! {
        <div class="import-instructions">
            <p>
                {format!(
                    "A planilha deve ter a aba \"{}\" com o cabeçalho na linha {} e os dados a partir da linha {} (até {} professores).",
                    t.sheet_name,
                    t.header_row + 1,
                    t.first_data_row + 1,
                    t.max_rows
                )}
            </p>
            <p>{format!("Formatos aceitos: {}", ALLOWED_EXTENSIONS.join(", "))}</p>
            <p class="import-instructions__columns">
                {format!("Colunas: {}", HEADERS.join(" | "))}
            </p>
        </div>
    }
}

fn report_view(response: ImportResponse) -> AnyView {
    match response {
        ImportResponse::Results(rows) => view! {
            <table class="data-table import-results">
                <thead>
                    <tr>
                        <th>"Matrícula"</th>
                        <th>"Nome"</th>
                        <th>"Sucesso"</th>
                        <th>"Mensagem"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|r| view! {
                            <tr class:import-results__row--failed=!r.sucesso>
                                <td>{r.matricula}</td>
                                <td>{r.nome}</td>
                                <td>{if r.sucesso { "✅" } else { "❌" }}</td>
                                <td>{r.mensagem}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
        ImportResponse::Summary(summary) => {
            let resumo = summary
                .resumo
                .and_then(|v| serde_json::to_string_pretty(&v).ok());
            view! {
                <div class="import-summary">
                    {resumo.map(|text| view! { <pre>{text}</pre> })}
                </div>
            }
            .into_any()
        }
        ImportResponse::Other(value) => {
            let text = serde_json::to_string_pretty(&value).unwrap_or_default();
            view! { <pre class="import-summary">{text}</pre> }.into_any()
        }
    }
}

#[component]
pub fn ProfessorBulkImportPage() -> impl IntoView {
    let vm = BulkImportViewModel::new();
    // web_sys::File is not Send, keep it on this thread
    let selected = StoredValue::new_local(None::<web_sys::File>);

    let on_select = Callback::new(move |file: Option<web_sys::File>| {
        vm.select_file(file.as_ref());
        let accepted = vm.accepted.get_untracked();
        selected.set_value(if accepted { file } else { None });
    });

    let on_process = move |_| vm.process(selected.get_value());

    let on_clear = move |_| {
        selected.set_value(None);
        vm.clear();
    };

    view! {
        <PageFrame page_id="a001_professor_import--usecase" category=PAGE_CAT_USECASE>
            <div class="page-header">
                <h2>"Importar professores da planilha"</h2>
            </div>

            {template_instructions()}

            <div class="import-controls">
                <Space gap=SpaceGap::Small>
                    <SpreadsheetPicker
                        on_select=on_select
                        disabled=Signal::derive(move || vm.busy.get())
                        reset=vm.reset_token
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.can_process())
                        on_click=on_process
                    >
                        {icon("upload")}
                        " Processar"
                    </Button>
                    <Button
                        disabled=Signal::derive(move || vm.busy.get())
                        on_click=on_clear
                    >
                        {icon("trash")}
                        " Limpar"
                    </Button>
                    <Show when=move || vm.busy.get()>
                        <Spinner />
                    </Show>
                </Space>
                {move || vm.file_info.get().map(|info| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {info}
                    </Badge>
                })}
            </div>

            <AlertArea notice=vm.notice />

            {move || vm.report.get().map(|report| report_view(report.response))}
        </PageFrame>
    }
}
