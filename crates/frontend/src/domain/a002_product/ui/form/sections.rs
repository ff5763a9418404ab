use crate::shared::components::ui::{Checkbox, Input, RadioGroup, Select, Textarea};
use contracts::domain::a002_product::draft::{DangerousGoods, ProductDraft, MIN_DESCRIPTION_WORDS};
use leptos::prelude::*;

#[component]
pub fn PriceStockSection(draft: RwSignal<ProductDraft>) -> impl IntoView {
    let price = Signal::derive(move || draft.get().price);
    let special_price = Signal::derive(move || draft.get().special_price);
    let stock = Signal::derive(move || draft.get().stock);
    let seller_sku = Signal::derive(move || draft.get().seller_sku);
    let availability = Signal::derive(move || draft.get().availability);

    view! {
        <div>
            <p style="margin: 0 0 14px; font-size: 13px; color: #888;">
                {"You can add variants to a product that has more than one option, such as size or color."}
            </p>
            <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 0 16px; align-items: start;">
                <Input
                    label="Price"
                    required=true
                    input_type="number"
                    value=price
                    error=Signal::derive(move || {
                        let d = draft.get();
                        d.price.trim().parse::<f64>().map(|v| v <= 0.0).unwrap_or(true)
                    })
                    placeholder="0.00"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.price = v))
                />
                <Input
                    label="Special Price"
                    input_type="number"
                    value=special_price
                    placeholder="0.00"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.special_price = v))
                />
                <Input
                    label="Stock"
                    required=true
                    input_type="number"
                    value=stock
                    error=Signal::derive(move || {
                        draft.get().stock.trim().parse::<u32>().is_err()
                    })
                    placeholder="0"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.stock = v))
                />
                <Input
                    label="Seller SKU"
                    value=seller_sku
                    placeholder="Seller SKU"
                    max_length=200
                    on_input=Callback::new(move |v: String| draft.update(|d| d.seller_sku = v))
                />
            </div>
            <Checkbox
                label="Available for sale"
                checked=availability
                on_change=Callback::new(move |v: bool| draft.update(|d| d.availability = v))
            />
        </div>
    }
}

#[component]
pub fn DescriptionSection(draft: RwSignal<ProductDraft>) -> impl IntoView {
    let description = Signal::derive(move || draft.get().description);
    let word_count = move || draft.with(|d| d.description_word_count());

    view! {
        <div>
            <Textarea
                label="Main Description"
                value=description
                rows=8
                error=Signal::derive(move || draft.with(|d| d.description_word_count()) < MIN_DESCRIPTION_WORDS)
                placeholder=format!("Describe your product in detail (minimum {} words)...", MIN_DESCRIPTION_WORDS)
                on_input=Callback::new(move |v: String| draft.update(|d| d.description = v))
            />
            <div style="display: flex; justify-content: space-between; margin-top: -8px; font-size: 12px;">
                <span style=move || {
                    if word_count() >= MIN_DESCRIPTION_WORDS { "color: #2e7d32;" } else { "color: #c0392b;" }
                }>
                    {move || format!("{} / {} words minimum", word_count(), MIN_DESCRIPTION_WORDS)}
                </span>
                <span style="color: #888;">
                    {move || format!("{} characters", draft.with(|d| d.description.len()))}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn ShippingSection(draft: RwSignal<ProductDraft>) -> impl IntoView {
    let weight = Signal::derive(move || draft.get().package_weight);
    let weight_unit = Signal::derive(move || draft.get().weight_unit);
    let length = Signal::derive(move || draft.get().package_dimensions.length);
    let width = Signal::derive(move || draft.get().package_dimensions.width);
    let height = Signal::derive(move || draft.get().package_dimensions.height);
    let dangerous = Signal::derive(move || match draft.get().dangerous_goods {
        DangerousGoods::None => "none".to_string(),
        DangerousGoods::Battery => "battery".to_string(),
    });
    let warranty_type = Signal::derive(move || draft.get().warranty.warranty_type);
    let warranty_period = Signal::derive(move || draft.get().warranty.period);
    let warranty_policy = Signal::derive(move || draft.get().warranty.policy);
    let return_policy = Signal::derive(move || draft.get().warranty.return_policy);

    let dim_error = |value: Signal<String>| {
        Signal::derive(move || value.get().trim().parse::<f64>().map(|v| v <= 0.0).unwrap_or(true))
    };

    view! {
        <div>
            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 0 16px; align-items: start;">
                <Input
                    label="Package Weight"
                    required=true
                    input_type="number"
                    value=weight
                    error=dim_error(weight)
                    placeholder="0.0"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.package_weight = v))
                />
                <Select
                    label="Unit"
                    value=weight_unit
                    options=vec![("kg".to_string(), "kg".to_string()), ("g".to_string(), "g".to_string())]
                    on_change=Callback::new(move |v: String| draft.update(|d| d.weight_unit = v))
                />
            </div>

            <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 0 16px; align-items: start;">
                <Input
                    label="Length (cm)"
                    required=true
                    input_type="number"
                    value=length
                    error=dim_error(length)
                    placeholder="0"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.package_dimensions.length = v))
                />
                <Input
                    label="Width (cm)"
                    required=true
                    input_type="number"
                    value=width
                    error=dim_error(width)
                    placeholder="0"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.package_dimensions.width = v))
                />
                <Input
                    label="Height (cm)"
                    required=true
                    input_type="number"
                    value=height
                    error=dim_error(height)
                    placeholder="0"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.package_dimensions.height = v))
                />
            </div>

            <RadioGroup
                label="Dangerous Goods"
                name="dangerous_goods".to_string()
                value=dangerous
                options=vec![
                    ("none".to_string(), "None".to_string()),
                    ("battery".to_string(), "Contains battery".to_string()),
                ]
                on_change=Callback::new(move |v: String| draft.update(|d| {
                    d.dangerous_goods = if v == "battery" {
                        DangerousGoods::Battery
                    } else {
                        DangerousGoods::None
                    };
                }))
            />

            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 0 16px; align-items: start;">
                <Select
                    label="Warranty Type"
                    required=true
                    value=warranty_type
                    error=Signal::derive(move || draft.with(|d| d.warranty.warranty_type.is_empty()))
                    placeholder="Select warranty type"
                    options=vec![
                        ("no-warranty".to_string(), "No Warranty".to_string()),
                        ("local-seller".to_string(), "Local Seller Warranty".to_string()),
                        ("manufacturer".to_string(), "International Manufacturer Warranty".to_string()),
                    ]
                    on_change=Callback::new(move |v: String| draft.update(|d| d.warranty.warranty_type = v))
                />
                <Input
                    label="Warranty Period"
                    value=warranty_period
                    placeholder="e.g., 12 months"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.warranty.period = v))
                />
            </div>

            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 0 16px; align-items: start;">
                <Input
                    label="Warranty Policy"
                    value=warranty_policy
                    placeholder="Warranty policy details"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.warranty.policy = v))
                />
                <Input
                    label="Return Policy"
                    value=return_policy
                    placeholder="Return policy details"
                    on_input=Callback::new(move |v: String| draft.update(|d| d.warranty.return_policy = v))
                />
            </div>
        </div>
    }
}
