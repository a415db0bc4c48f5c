use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only with an active session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <div>"Sessão encerrada. Faça login novamente."</div> }
        >
            {children()}
        </Show>
    }
}
