pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |       (Tabbed center)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                // Main content area
                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
