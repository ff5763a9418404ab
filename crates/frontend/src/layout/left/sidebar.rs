//! Sidebar component with collapsible menu items

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d400_seller_home",
            label: "Home",
            icon: "home",
            items: vec![],
        },
        MenuGroup {
            id: "products",
            label: "Products",
            icon: "store",
            items: vec![
                ("cs_manage_products", tab_label_for_key("cs_manage_products"), "list"),
                ("a002_product_add", tab_label_for_key("a002_product_add"), "plus"),
                ("cs_decorate_products", tab_label_for_key("cs_decorate_products"), "package"),
                ("cs_fulfilment", tab_label_for_key("cs_fulfilment"), "truck"),
                ("cs_opportunity_center", tab_label_for_key("cs_opportunity_center"), "target"),
                ("cs_assortment_growth", tab_label_for_key("cs_assortment_growth"), "trending-up"),
            ],
        },
        MenuGroup {
            id: "orders",
            label: "Orders",
            icon: "receipt",
            items: vec![
                ("a003_orders", tab_label_for_key("a003_orders"), "receipt"),
                ("cs_logistics", tab_label_for_key("cs_logistics"), "truck"),
                ("cs_return_orders", tab_label_for_key("cs_return_orders"), "package-x"),
                ("cs_reviews", tab_label_for_key("cs_reviews"), "message-square"),
            ],
        },
        MenuGroup {
            id: "cs_promotions",
            label: "Marketing Center",
            icon: "megaphone",
            items: vec![],
        },
        MenuGroup {
            id: "cs_data_insight",
            label: "Data Insight",
            icon: "bar-chart",
            items: vec![],
        },
        MenuGroup {
            id: "cs_shop_privilege",
            label: "Shop Privilege",
            icon: "trophy",
            items: vec![],
        },
        MenuGroup {
            id: "cs_learn",
            label: "Learn and Grow",
            icon: "school",
            items: vec![],
        },
        MenuGroup {
            id: "cs_engagement",
            label: "Engagement Center",
            icon: "message-square",
            items: vec![],
        },
        MenuGroup {
            id: "cs_store",
            label: "Store",
            icon: "building",
            items: vec![],
        },
        MenuGroup {
            id: "cs_finance",
            label: "Finance",
            icon: "wallet",
            items: vec![],
        },
        MenuGroup {
            id: "cs_support",
            label: "Support",
            icon: "help-circle",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec![]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__logo">
                <span class="app-sidebar__logo-title">{"Seller Center"}</span>
            </div>
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            // Parent item
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.get().as_ref().map(|a| a == &gid).unwrap_or(false)
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, tab_label_for_key(group.id));
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            // Children
                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
