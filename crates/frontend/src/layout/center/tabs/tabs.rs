use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::render_tab_content;
use leptos::prelude::*;

// Helper component for rendering individual tab content
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Check if this tab is active - this closure will be reactive
    let is_active = move || {
        let current_active = tabs_store.active.get();
        current_active.as_ref() == Some(&tab_key_for_active_check)
    };

    // Контент создаётся один раз при открытии таба; переключение вкладок
    // только прячет его, состояние страницы при этом сохраняется.
    let content = render_tab_content(&tab.key, tabs_store);

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
