pub mod state;

use crate::domain::a003_order::data::sample_orders;
use crate::shared::components::ui::Badge;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a003_order::filter::{count_by_status, paginate, SortOrder};
use contracts::domain::a003_order::order::{Order, OrderStatus, OrderType};
use leptos::prelude::*;
use state::{create_state, DatePreset};

fn order_type_key(t: OrderType) -> &'static str {
    match t {
        OrderType::Normal => "normal",
        OrderType::PreSale => "pre-sale",
        OrderType::Coupon => "coupon",
        OrderType::Cod => "cod",
        OrderType::StorePickup => "store-pickup",
        OrderType::PreOrderByDays => "pre-order-by-days",
        OrderType::PreOrderByDate => "pre-order-by-date",
        OrderType::Superlink => "superlink",
        OrderType::Installation => "installation",
    }
}

fn status_badge_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "success",
        OrderStatus::Unpaid => "warning",
        OrderStatus::FailedDelivery | OrderStatus::Cancellation => "error",
        OrderStatus::ToShip | OrderStatus::Shipping => "primary",
        OrderStatus::ReturnRefund => "neutral",
    }
}

/// Страница управления заказами: вкладки по статусам, панель фильтров,
/// таблица с выбором строк и пагинацией. Данные — статический список в
/// памяти; вся фильтрация и сортировка чистые, из contracts.
#[component]
pub fn OrdersList() -> impl IntoView {
    // Момент открытия страницы; все окна дат считаются относительно него.
    let now = StoredValue::new(Utc::now());
    let orders = StoredValue::new(sample_orders(now.get_value()));
    let state = create_state();

    let filtered = Memo::new(move |_| {
        let s = state.get();
        let filter = s.to_filter();
        orders.with_value(|all| {
            filter
                .apply(all, now.get_value())
                .into_iter()
                .cloned()
                .collect::<Vec<Order>>()
        })
    });

    let total_pages = move || {
        let s = state.get();
        let f = filtered.get();
        paginate(&f, s.page, s.page_size).1
    };

    let page_orders = move || {
        let s = state.get();
        let f = filtered.get();
        paginate(&f, s.page, s.page_size).0.to_vec()
    };

    let handle_export = move |_| {
        let selected = state.with_untracked(|s| s.selected_ids.len());
        let exported = if selected > 0 {
            selected
        } else {
            filtered.with_untracked(|f| f.len())
        };
        log::info!("exporting {} orders", exported);
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Exporting {} orders", exported));
        }
    };

    // Вкладки статусов: None — "All", дальше по порядку OrderStatus::ALL.
    let status_tabs = move || {
        let mut tabs: Vec<(Option<OrderStatus>, &'static str, usize)> = Vec::new();
        orders.with_value(|all| {
            tabs.push((None, "All", count_by_status(all, None)));
            for status in OrderStatus::ALL {
                tabs.push((Some(status), status.label(), count_by_status(all, Some(status))));
            }
        });
        tabs
    };

    view! {
        <div class="content">
            <PageHeader title="Order Management">
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
            </PageHeader>

            // Вкладки статусов
            <div style="display: flex; border-bottom: 1px solid #e0e0e0; background: white; overflow-x: auto;">
                {move || {
                    let active = state.with(|s| s.active_status);
                    status_tabs().into_iter().map(|(status, label, count)| {
                        let is_active = active == status;
                        view! {
                            <button
                                style={if is_active {
                                    "padding: 10px 14px; border: none; border-bottom: 2px solid var(--color-primary, #4a90e2); background: none; color: var(--color-primary, #4a90e2); font-weight: 500; cursor: pointer; white-space: nowrap; font-size: 14px;"
                                } else {
                                    "padding: 10px 14px; border: none; border-bottom: 2px solid transparent; background: none; color: #666; cursor: pointer; white-space: nowrap; font-size: 14px;"
                                }}
                                on:click=move |_| state.update(|s| {
                                    s.active_status = status;
                                    s.page = 0;
                                    s.selected_ids.clear();
                                })
                            >
                                {label}
                                {(count > 0).then(|| view! {
                                    <span style="margin-left: 6px; padding: 1px 7px; background: #f0f0f0; color: #555; border-radius: 10px; font-size: 12px;">
                                        {count}
                                    </span>
                                })}
                            </button>
                        }
                    }).collect_view()
                }}
            </div>

            // Панель фильтров
            <div style="padding: 12px 0; display: flex; flex-direction: column; gap: 10px;">
                <div style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
                    <span style="font-size: 14px; color: #555; font-weight: 500;">{"Order Date:"}</span>
                    {DatePreset::ALL.into_iter().map(|preset| {
                        let is_active = move || state.with(|s| s.date_preset) == preset;
                        view! {
                            <button
                                style=move || if is_active() {
                                    "padding: 5px 12px; border: none; border-radius: 4px; background: var(--color-primary, #4a90e2); color: white; cursor: pointer; font-size: 13px;"
                                } else {
                                    "padding: 5px 12px; border: none; border-radius: 4px; background: #f0f0f0; color: #555; cursor: pointer; font-size: 13px;"
                                }
                                on:click=move |_| state.update(|s| {
                                    s.date_preset = preset;
                                    s.page = 0;
                                })
                            >
                                {preset.label()}
                            </button>
                        }
                    }).collect_view()}
                    {move || (state.with(|s| s.date_preset) == DatePreset::Custom).then(|| view! {
                        <input
                            type="date"
                            style="padding: 4px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 13px;"
                            prop:value=move || state.with(|s| s.custom_from.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| { s.custom_from = value; s.page = 0; });
                            }
                        />
                        <span style="color: #888;">{"—"}</span>
                        <input
                            type="date"
                            style="padding: 4px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 13px;"
                            prop:value=move || state.with(|s| s.custom_to.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| { s.custom_to = value; s.page = 0; });
                            }
                        />
                    })}
                </div>

                <div style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
                    <input
                        type="text"
                        placeholder="Search order number..."
                        style="width: 200px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || state.with(|s| s.order_number.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| { s.order_number = value; s.page = 0; });
                        }
                    />
                    <input
                        type="text"
                        placeholder="Search tracking number..."
                        style="width: 200px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        prop:value=move || state.with(|s| s.tracking_number.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| { s.tracking_number = value; s.page = 0; });
                        }
                    />
                    <select
                        style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                s.order_type = OrderType::ALL
                                    .into_iter()
                                    .find(|t| order_type_key(*t) == value);
                                s.page = 0;
                            });
                        }
                    >
                        <option value="all">{"All order types"}</option>
                        {OrderType::ALL.into_iter().map(|t| view! {
                            <option value=order_type_key(t)>{t.label()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| {
                                s.sort = match value.as_str() {
                                    "oldest" => SortOrder::Oldest,
                                    "amount-high" => SortOrder::AmountHigh,
                                    "amount-low" => SortOrder::AmountLow,
                                    _ => SortOrder::Newest,
                                };
                            });
                        }
                    >
                        <option value="newest">{"Sort: Newest"}</option>
                        <option value="oldest">{"Sort: Oldest"}</option>
                        <option value="amount-high">{"Sort: Amount high to low"}</option>
                        <option value="amount-low">{"Sort: Amount low to high"}</option>
                    </select>
                </div>
            </div>

            // Таблица заказов
            <div class="table-container">
                <table style="width: 100%; border-collapse: collapse; background: white;">
                    <thead>
                        <tr style="border-bottom: 2px solid #ddd; text-align: left;">
                            <th class="text-center p-0-8" style="width: 40px;">
                                <input
                                    type="checkbox"
                                    style="margin: 0; cursor: pointer;"
                                    prop:checked=move || {
                                        let page_ids: Vec<_> = page_orders().iter().map(|o| o.id).collect();
                                        !page_ids.is_empty()
                                            && state.with(|s| page_ids.iter().all(|id| s.selected_ids.contains(id)))
                                    }
                                    on:change=move |_| {
                                        let page_ids: Vec<_> = page_orders().iter().map(|o| o.id).collect();
                                        state.update(|s| {
                                            if page_ids.iter().all(|id| s.selected_ids.contains(id)) {
                                                s.selected_ids.clear();
                                            } else {
                                                s.selected_ids = page_ids;
                                            }
                                        });
                                    }
                                />
                            </th>
                            <th class="p-0-8">{"Order"}</th>
                            <th class="p-0-8">{"Product"}</th>
                            <th class="p-0-8">{"Customer"}</th>
                            <th class="p-0-8 text-right">{"Amount"}</th>
                            <th class="p-0-8">{"Delivery"}</th>
                            <th class="p-0-8">{"Type"}</th>
                            <th class="p-0-8">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page_orders();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="8" class="text-center" style="color: #888; padding: 24px;">
                                            {"No orders match the current filters"}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|order| {
                                    let id = order.id;
                                    let is_selected = move || state.with(|s| s.selected_ids.contains(&id));
                                    view! {
                                        <tr style="border-bottom: 1px solid #eee;">
                                            <td class="text-center p-0-8">
                                                <input
                                                    type="checkbox"
                                                    style="margin: 0; cursor: pointer;"
                                                    prop:checked=is_selected
                                                    on:change=move |_| state.update(|s| {
                                                        if let Some(pos) = s.selected_ids.iter().position(|x| *x == id) {
                                                            s.selected_ids.remove(pos);
                                                        } else {
                                                            s.selected_ids.push(id);
                                                        }
                                                    })
                                                />
                                            </td>
                                            <td class="p-0-8">
                                                <div style="font-weight: 500; color: #333;">{order.order_number.clone()}</div>
                                                <div style="font-size: 12px; color: #888;">
                                                    {order.order_date.format("%b %e, %Y").to_string()}
                                                </div>
                                                <div style="font-size: 12px; color: #888; font-family: monospace;">{order.tracking_number.clone()}</div>
                                            </td>
                                            <td class="p-0-8">
                                                <div style="color: #333; max-width: 320px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                                    {order.product_name.clone()}
                                                </div>
                                                <div style="font-size: 12px; color: #888;">
                                                    {format!("{} · x{}", order.variant, order.quantity)}
                                                </div>
                                            </td>
                                            <td class="p-0-8">
                                                <div style="color: #333;">{order.customer_name.clone()}</div>
                                                <div style="font-size: 12px; color: #888;">{order.shipping_address.clone()}</div>
                                            </td>
                                            <td class="p-0-8 text-right" style="font-weight: 500; color: #333;">
                                                {format!("₱{:.2}", order.total_amount)}
                                            </td>
                                            <td class="p-0-8">
                                                <div style="color: #555;">{order.delivery_option.clone()}</div>
                                                <div style="font-size: 12px; color: #888;">{order.payment_method.clone()}</div>
                                            </td>
                                            <td class="p-0-8" style="color: #555;">{order.order_type.label()}</td>
                                            <td class="p-0-8">
                                                <Badge variant=status_badge_variant(order.status)>
                                                    {order.status.label()}
                                                </Badge>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(total_pages)
                total_count=Signal::derive(move || filtered.with(|f| f.len()))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                on_page_size_change=Callback::new(move |size| state.update(|s| {
                    s.page_size = size;
                    s.page = 0;
                }))
            />
        </div>
    }
}
