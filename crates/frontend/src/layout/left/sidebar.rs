//! Sidebar menu, one entry per registered page. Collapsed from the top header.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::PAGES;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__content">
            {PAGES.iter().map(|&(key, label, icon_name)| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == key
                        style:padding-left="12px"
                        on:click=move |_| ctx.navigate(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
            </div>
        </nav>
    }
}
