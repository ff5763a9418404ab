//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::dashboards::SellerHomeDashboard;
use crate::domain::a002_product::ui::form::AddProductForm;
use crate::domain::a003_order::ui::list::OrdersList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::coming_soon::ComingSoon;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_seller_home" => view! { <SellerHomeDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Domain pages
        // ═══════════════════════════════════════════════════════════════════
        "a002_product_add" => view! { <AddProductForm /> }.into_any(),
        "a003_orders" => view! { <OrdersList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Coming-soon placeholders
        // ═══════════════════════════════════════════════════════════════════
        "cs_promotions" => view! {
            <ComingSoon
                title="Promotions".to_string()
                description="Advanced promotional campaign management and discount tools are being developed to help you create compelling offers and boost sales.".to_string()
                features=vec![
                    "Flash sale management",
                    "Discount code generation",
                    "Bundle deal creation",
                    "Seasonal campaign tools",
                    "Performance tracking",
                    "A/B testing capabilities",
                ]
            />
        }
        .into_any(),
        "cs_opportunity_center" => view! {
            <ComingSoon
                title="Opportunity Center".to_string()
                description="Advanced business opportunity identification and growth recommendation system is under development to help you discover new revenue streams.".to_string()
                features=vec![
                    "Market opportunity analysis",
                    "Product recommendation engine",
                    "Trend identification tools",
                    "Competitive gap analysis",
                    "Revenue optimization suggestions",
                    "Growth strategy recommendations",
                ]
            />
        }
        .into_any(),
        "cs_assortment_growth" => view! {
            <ComingSoon
                title="Assortment Growth Center".to_string()
                description="Intelligent product assortment optimization and expansion tools are being developed to help you build a winning product portfolio.".to_string()
                features=vec![
                    "Product portfolio analysis",
                    "Assortment gap identification",
                    "Category expansion recommendations",
                    "Performance benchmarking",
                    "Inventory optimization",
                    "Cross-selling opportunities",
                ]
            />
        }
        .into_any(),
        "cs_fulfilment" => view! {
            <ComingSoon
                title="Fulfilment Service".to_string()
                description="The marketplace fulfilment service is being enhanced to provide you with seamless inventory management and order processing capabilities.".to_string()
                features=vec![
                    "Automated inventory management",
                    "Fast and reliable shipping",
                    "Customer service support",
                    "Returns and refunds handling",
                    "Multi-warehouse distribution",
                    "Real-time inventory tracking",
                ]
            />
        }
        .into_any(),
        k if k.starts_with("cs_") => {
            let title = tab_label_for_key(k).to_string();
            view! { <ComingSoon title=title /> }.into_any()
        }

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
