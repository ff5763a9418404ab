mod sections;

use crate::domain::a001_category::data::recently_used;
use crate::domain::a001_category::ui::picker::CategoryPicker;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_category::navigator::SelectionOutcome;
use contracts::domain::a002_product::completion::{content_score, ScoreQuality, SectionCompletion};
use contracts::domain::a002_product::draft::ProductDraft;
use contracts::domain::a002_product::spec_template::{
    template_for_category, SpecInput, SpecTemplate,
};
use leptos::prelude::*;
use sections::{DescriptionSection, PriceStockSection, ShippingSection};

/// Ключ черновика в хранилище состояний форм.
const FORM_STATE_KEY: &str = "a002_product_add";

#[derive(Debug, Clone, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Success(String),
    Error(String, Vec<String>),
}

/// Страница создания товара: раскрывающиеся секции формы, производная
/// заполненность и балл контента, валидация и имитация отправки.
#[component]
pub fn AddProductForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Черновик переживает переключение табов через form_states.
    let initial = ctx
        .get_form_state(FORM_STATE_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_else(ProductDraft::new);
    let draft = RwSignal::new(initial);

    let show_picker = RwSignal::new(false);
    let submit_state = RwSignal::new(SubmitState::Idle);
    let expanded = RwSignal::new(vec!["basic_info"]);

    // Производное состояние формы: шаблон спецификации зависит от выбранной
    // категории, заполненность и балл — от черновика целиком.
    let template = Memo::new(move |_| template_for_category(&draft.get().category));
    let completion = Memo::new(move |_| SectionCompletion::evaluate(&draft.get(), &template.get()));
    let score = Memo::new(move |_| content_score(&completion.get()));

    let handle_submit = move |is_draft: bool| {
        submit_state.set(SubmitState::Submitting);

        let payload = draft.get_untracked();

        if is_draft {
            // Черновик сохраняется без валидации.
            match serde_json::to_value(&payload) {
                Ok(state) => ctx.set_form_state(FORM_STATE_KEY.to_string(), state),
                Err(e) => log::warn!("failed to stash product draft: {}", e),
            }
        } else {
            let errors = payload.validation_errors(&template.get_untracked());
            if !errors.is_empty() {
                submit_state.set(SubmitState::Error(
                    "Please fix the validation errors before submitting".to_string(),
                    errors,
                ));
                return;
            }
        }

        wasm_bindgen_futures::spawn_local(async move {
            // Имитация сетевого вызова; сервера у приложения нет.
            gloo_timers::future::TimeoutFuture::new(2_000).await;

            match serde_json::to_string(&payload) {
                Ok(json) => log::info!("product payload (draft: {}): {}", is_draft, json),
                Err(e) => log::warn!("failed to serialize product payload: {}", e),
            }

            let message = if is_draft {
                "Product saved as draft successfully!"
            } else {
                "Product submitted successfully!"
            };
            submit_state.set(SubmitState::Success(message.to_string()));
        });
    };

    let is_submitting = move || submit_state.get() == SubmitState::Submitting;

    let score_bar = move || {
        let value = score.get();
        let quality = ScoreQuality::for_score(value);
        let color = match quality {
            ScoreQuality::Excellent => "#4caf50",
            ScoreQuality::Good => "#4a90e2",
            ScoreQuality::Fair => "#f4b942",
            ScoreQuality::Poor => "#e05252",
        };
        view! {
            <div style="display: flex; align-items: center; gap: 10px;">
                <span style="font-size: 14px; color: #666;">{"Form Completion:"}</span>
                <div style="width: 140px; height: 8px; background: #e8e8e8; border-radius: 4px; overflow: hidden;">
                    <div style=format!("height: 100%; width: {}%; background: {}; transition: width 0.3s;", value, color)></div>
                </div>
                <span style=format!("font-size: 14px; font-weight: 600; color: {};", color)>
                    {format!("{}% · {}", value, quality.label())}
                </span>
            </div>
        }
    };

    view! {
        <div class="content">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <h1 class="page-header__title">{"Add Product"}</h1>
                    </div>
                </div>
                <div class="page-header__actions">
                    {score_bar}
                </div>
            </div>

            // Баннер результата отправки / ошибок валидации
            {move || match submit_state.get() {
                SubmitState::Idle | SubmitState::Submitting => view! { <></> }.into_any(),
                SubmitState::Success(message) => view! {
                    <div style="margin: 12px 0; padding: 12px 16px; border: 1px solid #b7dfb9; background: #edf7ee; border-radius: 6px; display: flex; align-items: center; gap: 10px; color: #2e7d32;">
                        {icon("check")}
                        <span style="flex: 1; font-weight: 500;">{message}</span>
                        <button
                            style="background: none; border: none; cursor: pointer; color: #888; display: inline-flex;"
                            on:click=move |_| submit_state.set(SubmitState::Idle)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }.into_any(),
                SubmitState::Error(message, errors) => view! {
                    <div style="margin: 12px 0; padding: 12px 16px; border: 1px solid #f2c0c0; background: #fdf0f0; border-radius: 6px; color: #c0392b;">
                        <div style="display: flex; align-items: center; gap: 10px;">
                            {icon("alert-triangle")}
                            <span style="flex: 1; font-weight: 500;">{message}</span>
                            <button
                                style="background: none; border: none; cursor: pointer; color: #888; display: inline-flex;"
                                on:click=move |_| submit_state.set(SubmitState::Idle)
                            >
                                {icon("x")}
                            </button>
                        </div>
                        <ul style="margin: 8px 0 0; padding-left: 26px;">
                            {errors.into_iter().map(|e| view! { <li style="margin: 2px 0; font-size: 14px;">{e}</li> }).collect_view()}
                        </ul>
                    </div>
                }.into_any(),
            }}

            <div class="form-sections" style="background: white; border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden;">
                <SectionShell
                    id="basic_info"
                    title="Basic Information"
                    complete=Signal::derive(move || completion.get().basic_info)
                    expanded=expanded
                >
                    <BasicInfoSection draft=draft show_picker=show_picker />
                </SectionShell>

                <SectionShell
                    id="specification"
                    title="Product Specification"
                    complete=Signal::derive(move || completion.get().specification)
                    expanded=expanded
                >
                    <SpecificationSection draft=draft template=template expanded=expanded />
                </SectionShell>

                <SectionShell
                    id="price_stock"
                    title="Price, Stock & Variants"
                    complete=Signal::derive(move || completion.get().price_stock)
                    expanded=expanded
                >
                    <PriceStockSection draft=draft />
                </SectionShell>

                <SectionShell
                    id="description"
                    title="Product Description"
                    complete=Signal::derive(move || completion.get().description)
                    expanded=expanded
                >
                    <DescriptionSection draft=draft />
                </SectionShell>

                <SectionShell
                    id="shipping"
                    title="Shipping & Warranty"
                    complete=Signal::derive(move || completion.get().shipping)
                    expanded=expanded
                >
                    <ShippingSection draft=draft />
                </SectionShell>
            </div>

            // Подвал формы
            <div style="display: flex; justify-content: flex-end; gap: 12px; padding: 16px 0;">
                <button
                    class="button button--secondary"
                    disabled=is_submitting
                    on:click=move |_| handle_submit(true)
                >
                    {"Save Draft"}
                </button>
                <button
                    class="button button--primary"
                    disabled=is_submitting
                    on:click=move |_| handle_submit(false)
                >
                    {move || if is_submitting() { "Submitting..." } else { "Submit" }}
                </button>
            </div>

            {move || show_picker.get().then(|| view! {
                <CategoryPicker on_close=move |outcome: SelectionOutcome| {
                    if let SelectionOutcome::Confirmed(_) = &outcome {
                        let breadcrumb = outcome.breadcrumb();
                        draft.update(|d| d.category = breadcrumb);
                    }
                    show_picker.set(false);
                } />
            })}
        </div>
    }
}

/// Обёртка секции формы: заголовок с индикатором заполненности,
/// тело показывается только в развёрнутом состоянии.
#[component]
fn SectionShell(
    id: &'static str,
    title: &'static str,
    #[prop(into)] complete: Signal<bool>,
    expanded: RwSignal<Vec<&'static str>>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_expanded = move || expanded.get().contains(&id);

    let toggle = move |_| {
        expanded.update(|items| {
            if let Some(pos) = items.iter().position(|x| *x == id) {
                items.remove(pos);
            } else {
                items.push(id);
            }
        });
    };

    view! {
        <div class="form-section" style="border-bottom: 1px solid #e0e0e0;">
            <button
                style="width: 100%; display: flex; align-items: center; justify-content: space-between; gap: 10px; padding: 14px 20px; background: none; border: none; cursor: pointer;"
                on:click=toggle
            >
                <span style="display: inline-flex; align-items: center; gap: 10px;">
                    <span style=move || {
                        if complete.get() {
                            "width: 20px; height: 20px; border-radius: 50%; border: 2px solid var(--color-primary, #4a90e2); background: var(--color-primary, #4a90e2); color: white; display: inline-flex; align-items: center; justify-content: center;"
                        } else {
                            "width: 20px; height: 20px; border-radius: 50%; border: 2px solid #ccc; display: inline-flex;"
                        }
                    }>
                        {move || complete.get().then(|| icon("check"))}
                    </span>
                    <span style="font-weight: 600; color: #333;">{title}</span>
                </span>
                <span
                    style="color: #999; display: inline-flex;"
                    class:rotated=is_expanded
                >
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=is_expanded>
                <div style="padding: 0 20px 20px;">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn BasicInfoSection(draft: RwSignal<ProductDraft>, show_picker: RwSignal<bool>) -> impl IntoView {
    let name = Signal::derive(move || draft.get().product_name);
    let category = move || draft.get().category;

    view! {
        <div>
            <Input
                label="Product Name"
                required=true
                value=name
                error=Signal::derive(move || draft.get().product_name.trim().is_empty())
                placeholder="Enter product name (e.g., Wireless Bluetooth Headphones)"
                max_length=255
                on_input=Callback::new(move |value: String| draft.update(|d| d.product_name = value))
            />
            <div style="display: flex; justify-content: space-between; margin: -8px 0 12px; font-size: 12px; color: #888;">
                <span>{move || if name.get().trim().is_empty() { "⚠ Required field" } else { "✓ Valid" }}</span>
                <span>{move || format!("{}/255", name.get().len())}</span>
            </div>

            <div class="form__group">
                <label class="form__label">
                    <span class="form__required">{"* "}</span>
                    {"Category"}
                </label>
                <button
                    style="width: 100%; display: flex; align-items: center; justify-content: space-between; padding: 9px 12px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; text-align: left; font-size: 14px;"
                    on:click=move |_| show_picker.set(true)
                >
                    <span style=move || if category().is_empty() { "color: #aaa;" } else { "color: #333;" }>
                        {move || {
                            let c = category();
                            if c.is_empty() { "Please select category or search with keyword".to_string() } else { c }
                        }}
                    </span>
                    {icon("chevron-down")}
                </button>
                {move || (!category().is_empty()).then(|| view! {
                    <div style="display: flex; align-items: center; gap: 8px; margin-top: 8px; font-size: 12px; color: #666;">
                        <span>{"Recently used:"}</span>
                        {recently_used().into_iter().map(|tag| view! {
                            <Badge variant="neutral">{tag}</Badge>
                        }).collect_view()}
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn SpecificationSection(
    draft: RwSignal<ProductDraft>,
    template: Memo<SpecTemplate>,
    expanded: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    view! {
        {move || {
            let current = template.get();
            let category = draft.with(|d| d.category.clone());

            if category.is_empty() {
                return view! {
                    <div style="padding: 24px; text-align: center; color: #888;">
                        <p style="margin: 0 0 8px;">{"Please select a category first"}</p>
                        <button
                            style="background: none; border: none; cursor: pointer; color: var(--color-primary, #4a90e2); text-decoration: underline; font-size: 14px;"
                            on:click=move |_| expanded.update(|items| {
                                if !items.contains(&"basic_info") {
                                    items.push("basic_info");
                                }
                            })
                        >
                            {"Go to Basic Information"}
                        </button>
                    </div>
                }.into_any();
            }

            view! {
                <div>
                    <div style="margin-bottom: 12px; padding: 10px 12px; background: #e8f1fd; border-radius: 6px; font-size: 14px; color: #2d5f9e;">
                        {format!("Category: {}", current.category_label)}
                    </div>
                    <p style="margin: 0 0 14px; font-size: 13px; color: #888;">
                        {"Filling in attributes will increase product searchability, driving sales conversion"}
                    </p>
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 0 16px;">
                        {current.fields.into_iter().map(|field| {
                            let field_name = field.name;
                            let value = Signal::derive(move || draft.with(|d| d.spec_value(field_name).to_string()));
                            let error = Signal::derive(move || {
                                field.required && draft.with(|d| d.spec_value(field_name).is_empty())
                            });
                            let on_change = Callback::new(move |v: String| {
                                draft.update(|d| d.set_spec_value(field_name, v));
                            });

                            let label_view = view! {
                                <span>
                                    {field.label}
                                    {field.key_attribute.then(|| view! {
                                        <span style="margin-left: 6px;"><Badge variant="primary">{"KEY"}</Badge></span>
                                    })}
                                </span>
                            };

                            match field.input {
                                SpecInput::Select(options) => {
                                    let opts: Vec<(String, String)> = options
                                        .iter()
                                        .map(|o| (o.to_string(), o.to_string()))
                                        .collect();
                                    view! {
                                        <div>
                                            <label class="form__label">
                                                {field.required.then(|| view! { <span class="form__required">{"* "}</span> })}
                                                {label_view}
                                            </label>
                                            <Select
                                                value=value
                                                options=opts
                                                placeholder=format!("Select {}", field.label)
                                                error=error
                                                required=field.required
                                                on_change=on_change
                                            />
                                        </div>
                                    }.into_any()
                                }
                                SpecInput::Text => view! {
                                    <div>
                                        <label class="form__label">
                                            {field.required.then(|| view! { <span class="form__required">{"* "}</span> })}
                                            {label_view}
                                        </label>
                                        <Input
                                            value=value
                                            placeholder=format!("Enter {}", field.label.to_lowercase())
                                            error=error
                                            required=field.required
                                            on_input=on_change
                                        />
                                    </div>
                                }.into_any(),
                            }
                        }).collect_view()}
                    </div>
                </div>
            }.into_any()
        }}
    }
}
