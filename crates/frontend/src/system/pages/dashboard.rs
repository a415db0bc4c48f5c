use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{page_title, PAGE_PROFESSOR, PAGE_PROFESSOR_IMPORT};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Landing page: greeting and shortcuts
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state
            .get()
            .user_info
            .map(|u| format!("Olá, {}!", u.nome_funcionario))
            .unwrap_or_else(|| "Olá!".to_string())
    };
    let unidade = move || {
        auth_state
            .get()
            .user_info
            .and_then(|u| u.codigo_unidade)
            .map(|c| format!("Unidade {}", c))
    };

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{greeting}</h2>
                {move || unidade().map(|u| view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{u}</Badge> })}
            </div>
            <div class="page__content">
                <p>"Escolha uma das opções para começar:"</p>
                <Space gap=SpaceGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(PAGE_PROFESSOR)>
                        {icon("users")}
                        {page_title(PAGE_PROFESSOR)}
                    </Button>
                    <Button on_click=move |_| ctx.navigate(PAGE_PROFESSOR_IMPORT)>
                        {icon("upload")}
                        {page_title(PAGE_PROFESSOR_IMPORT)}
                    </Button>
                </Space>
            </div>
        </PageFrame>
    }
}
