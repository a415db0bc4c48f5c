use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::file_gate::accept_attribute;
use crate::shared::icons::icon;

/// Spreadsheet file input. Emits the picked file, or `None` when the
/// selection is cleared. `reset` bumps clear the native input.
#[component]
pub fn SpreadsheetPicker(
    on_select: Callback<Option<web_sys::File>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] reset: Signal<u32>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        reset.track();
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    });

    let handle_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        on_select.run(file);
    };

    view! {
        <label class="excel-importer__file-btn" class:excel-importer__file-btn--disabled=move || disabled.get()>
            {icon("file-spreadsheet")}
            <span>"Escolher planilha"</span>
            <input
                node_ref=input_ref
                type="file"
                accept=accept_attribute()
                style="display: none;"
                prop:disabled=move || disabled.get()
                on:change=handle_change
            />
        </label>
    }
}
