use crate::domain::a001_category::data::{category_tree, recently_used};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a001_category::navigator::{CategoryNavigator, SelectionOutcome};
use contracts::domain::a001_category::tree::CategoryNode;
use leptos::prelude::*;

/// Модальное окно выбора категории товара: параллельные колонки по уровням
/// дерева (Miller columns), у каждой колонки свой фильтр по подстроке.
///
/// Всё состояние сессии живёт в `CategoryNavigator`; компонент только
/// отображает его и транслирует клики в переходы. Результат — один
/// `SelectionOutcome`, отдаваемый наружу при закрытии.
#[component]
pub fn CategoryPicker<F>(on_close: F) -> impl IntoView
where
    F: Fn(SelectionOutcome) + 'static + Clone + Send,
{
    let nav = RwSignal::new(CategoryNavigator::new(category_tree().to_vec()));

    let on_cancel = {
        let on_close = on_close.clone();
        move |_| on_close(nav.with_untracked(|n| n.cancel()))
    };

    let on_confirm = {
        let on_close = on_close.clone();
        move |_| {
            // Кнопка выключена при пустом пути, но подтверждение всё равно
            // защищено предусловием.
            if let Some(outcome) = nav.with_untracked(|n| n.confirm()) {
                on_close(outcome);
            }
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="picker-container" style="width: 85%; max-width: 1100px; height: 85vh; display: flex; flex-direction: column; background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.15);">
                <div class="picker-header" style="padding: 16px 20px; border-bottom: 2px solid var(--color-primary, #4a90e2); background: linear-gradient(to bottom, #fff, #f9f9f9);">
                    <h3 style="margin: 0 0 10px; color: var(--color-primary, #4a90e2); font-size: 1.3rem;">{"Select Category"}</h3>
                    <div style="display: flex; gap: 8px; flex-wrap: wrap; align-items: center;">
                        <span class="badge badge--primary">{"Recently used"}</span>
                        {recently_used().into_iter().map(|name| {
                            view! {
                                <button
                                    class="button button--ghost button--small"
                                    on:click=move |_| nav.update(|n| { n.jump_to_recent(name); })
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // Колонки уровней дерева
                <div class="picker-content" style="flex: 1; min-height: 0; display: flex; overflow-x: auto;">
                    {move || {
                        let n = nav.get();
                        (0..n.column_count()).map(|col| {
                            let filter_value = n.filter(col).to_string();
                            let filter_is_set = !filter_value.is_empty();
                            let selected_id = n.selected_id_at(col).map(str::to_string);
                            let nodes: Vec<CategoryNode> =
                                n.filtered_column(col).into_iter().cloned().collect();

                            view! {
                                <div style="flex: 1; min-width: 200px; border-right: 1px solid #e0e0e0; display: flex; flex-direction: column;">
                                    // Фильтр колонки
                                    <div style="padding: 10px; background: #f9f9f9; border-bottom: 1px solid #e0e0e0; position: relative; display: flex; align-items: center; gap: 6px;">
                                        <span style="color: #999; display: inline-flex;">{icon("search")}</span>
                                        <input
                                            type="text"
                                            placeholder="Filter..."
                                            style="flex: 1; min-width: 0; padding: 6px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                            prop:value=filter_value
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                nav.update(|n| n.set_filter(col, value));
                                            }
                                        />
                                        {filter_is_set.then(|| view! {
                                            <button
                                                style="background: none; border: none; cursor: pointer; padding: 2px; display: inline-flex; color: #666;"
                                                title="Clear filter"
                                                on:click=move |_| nav.update(|n| n.set_filter(col, ""))
                                            >
                                                {icon("x")}
                                            </button>
                                        })}
                                    </div>

                                    // Список категорий уровня
                                    <div style="flex: 1; overflow-y: auto;">
                                        {if nodes.is_empty() {
                                            view! {
                                                <div style="padding: 32px 12px; text-align: center; color: #888; font-size: 14px;">
                                                    {"No categories found"}
                                                </div>
                                            }.into_any()
                                        } else {
                                            nodes.into_iter().map(|node| {
                                                let is_selected = selected_id.as_deref() == Some(node.id.as_str());
                                                let has_children = node.has_children();
                                                let restricted = node.restricted;
                                                let name = node.name.clone();
                                                let node_for_click = node.clone();

                                                view! {
                                                    <button
                                                        style={if is_selected {
                                                            "display: flex; align-items: center; justify-content: space-between; gap: 8px; width: 100%; text-align: left; padding: 8px 12px; border: none; border-left: 2px solid var(--color-primary, #4a90e2); background: #e8f1fd; color: var(--color-primary, #4a90e2); font-weight: 500; cursor: pointer; font-size: 14px;"
                                                        } else {
                                                            "display: flex; align-items: center; justify-content: space-between; gap: 8px; width: 100%; text-align: left; padding: 8px 12px; border: none; border-left: 2px solid transparent; background: none; color: #333; cursor: pointer; font-size: 14px;"
                                                        }}
                                                        on:click=move |_| nav.update(|n| n.select(col, &node_for_click))
                                                    >
                                                        <span style="display: inline-flex; align-items: center; gap: 6px; min-width: 0;">
                                                            <span style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{name}</span>
                                                            {restricted.then(|| view! {
                                                                <Badge variant="neutral">{"Restricted"}</Badge>
                                                            })}
                                                        </span>
                                                        {has_children.then(|| view! {
                                                            <span style="flex-shrink: 0; color: #999; display: inline-flex;">{icon("chevron-right")}</span>
                                                        })}
                                                    </button>
                                                }
                                            }).collect_view().into_any()
                                        }}
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>

                // Подвал: текущий выбор и кнопки
                <div style="padding: 14px 20px; border-top: 1px solid #e0e0e0; background: #f9f9f9; display: flex; align-items: center; justify-content: space-between; gap: 16px;">
                    <div style="display: flex; align-items: center; gap: 8px; min-width: 0; color: #555; font-size: 14px;">
                        <span style="flex-shrink: 0;">{"Current selection:"}</span>
                        <span style="color: var(--color-primary, #4a90e2); font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                            {move || {
                                let crumbs = nav.with(|n| n.breadcrumb());
                                if crumbs.is_empty() { "None".to_string() } else { crumbs }
                            }}
                        </span>
                        {move || nav.with(|n| n.has_selection()).then(|| view! {
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 2px; display: inline-flex; color: #999;"
                                title="Clear selection"
                                on:click=move |_| nav.update(|n| n.reset())
                            >
                                {icon("x")}
                            </button>
                        })}
                    </div>
                    <div style="display: flex; gap: 12px; flex-shrink: 0;">
                        <button
                            class="button button--secondary"
                            on:click=on_cancel
                        >
                            {"Cancel"}
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || !nav.with(|n| n.has_selection())
                            on:click=on_confirm
                        >
                            {icon("check")}
                            {"Confirm"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
