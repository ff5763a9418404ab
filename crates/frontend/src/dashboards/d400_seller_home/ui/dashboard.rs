use crate::domain::a003_order::data::sample_orders;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a003_order::filter::count_by_status;
use contracts::domain::a003_order::order::OrderStatus;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Домашний дашборд продавца: сводка по заказам и быстрые переходы.
#[component]
pub fn SellerHomeDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let now = Utc::now();
    let orders = sample_orders(now);

    let today = now.date_naive();
    let orders_today = orders
        .iter()
        .filter(|o| o.order_date.date_naive() == today)
        .count() as f64;
    let revenue: f64 = orders
        .iter()
        .filter(|o| !matches!(o.status, OrderStatus::Cancellation | OrderStatus::ReturnRefund))
        .map(|o| o.total_amount)
        .sum();
    let to_ship = count_by_status(&orders, Some(OrderStatus::ToShip)) as f64;
    let problem_orders = (count_by_status(&orders, Some(OrderStatus::FailedDelivery))
        + count_by_status(&orders, Some(OrderStatus::ReturnRefund))) as f64;

    let quick_links = [
        ("a002_product_add", "plus"),
        ("a003_orders", "receipt"),
        ("cs_promotions", "megaphone"),
        ("cs_data_insight", "bar-chart"),
    ];

    view! {
        <div class="content">
            <PageHeader title="Seller Home" subtitle="Overview of your shop for the last 30 days">
                <></>
            </PageHeader>

            <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin: 16px 0;">
                <StatCard
                    label="Orders today".to_string()
                    icon_name="shopping-cart".to_string()
                    value=Signal::derive(move || Some(orders_today))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Revenue".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(revenue))
                    format=ValueFormat::Money { currency: "₱".to_string() }
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label="Waiting to ship".to_string()
                    icon_name="truck".to_string()
                    value=Signal::derive(move || Some(to_ship))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if to_ship > 0.0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral }
                    })
                />
                <StatCard
                    label="Problem orders".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || Some(problem_orders))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if problem_orders > 0.0 { IndicatorStatus::Bad } else { IndicatorStatus::Good }
                    })
                    subtitle=Signal::derive(|| Some("Failed deliveries and returns".to_string()))
                />
            </div>

            <div style="background: white; border: 1px solid #e0e0e0; border-radius: 8px; padding: 16px 20px;">
                <h3 style="margin: 0 0 12px; font-size: 1rem; color: #333;">{"Quick actions"}</h3>
                <div style="display: flex; gap: 12px; flex-wrap: wrap;">
                    {quick_links.into_iter().map(|(key, icon_name)| {
                        view! {
                            <button
                                class="button button--secondary"
                                on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
                            >
                                {icon(icon_name)}
                                {tab_label_for_key(key)}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
