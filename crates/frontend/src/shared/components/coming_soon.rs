use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заглушка для разделов, которые ещё в разработке.
#[component]
pub fn ComingSoon(
    /// Page title
    title: String,
    /// Optional description shown under the "Coming Soon" heading
    #[prop(optional, into)]
    description: Option<String>,
    /// Planned feature bullet list
    #[prop(optional)]
    features: Vec<&'static str>,
) -> impl IntoView {
    let description = description.unwrap_or_else(|| {
        "This feature is currently under development and will be available soon.".to_string()
    });

    view! {
        <div class="content">
            <PageHeader title=title>
                <></>
            </PageHeader>

            <div class="coming-soon" style="flex: 1; display: flex; align-items: center; justify-content: center; padding: 32px;">
                <div style="max-width: 560px; text-align: center;">
                    <div class="coming-soon__icon" style="width: 96px; height: 96px; margin: 0 auto 24px; border-radius: 50%; background: #e8f1fd; display: flex; align-items: center; justify-content: center; color: var(--color-primary, #4a90e2);">
                        {icon("clock")}
                    </div>
                    <h2 style="margin: 0 0 12px; font-size: 1.6rem; color: #333;">{"Coming Soon"}</h2>
                    <p style="margin: 0 0 20px; color: #666;">{description}</p>
                    {(!features.is_empty()).then(|| view! {
                        <div style="text-align: left; background: #f9f9f9; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px 20px;">
                            <div style="font-weight: 600; color: #333; margin-bottom: 8px;">{"What to expect"}</div>
                            <ul style="margin: 0; padding-left: 18px; color: #555;">
                                {features.into_iter().map(|f| view! { <li style="margin: 4px 0;">{f}</li> }).collect_view()}
                            </ul>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
