//! Top bar: sidebar toggle, application title, logged user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();
    let logout = move |_| do_logout(set_auth_state);

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Cadastro de Professores"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.nome_funcionario.clone())
                            .unwrap_or_else(|| "Visitante".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
