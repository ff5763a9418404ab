use leptos::prelude::*;

/// Select component with label and placeholder option
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Placeholder for the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Reactive error flag: renders the invalid-state border
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let select_class = move || {
        if error.get().unwrap_or(false) {
            "form__select form__select--error"
        } else {
            "form__select"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {required.then(|| view! { <span class="form__required">{"* "}</span> })}
                    {l}
                </label>
            })}
            <select
                class=select_class
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| {
                    let empty_selected = move || value.get().is_empty();
                    view! { <option value="" selected=empty_selected>{p}</option> }
                })}
                {options.into_iter().map(|(val, label)| {
                    let val_clone = val.clone();
                    let is_selected = move || value.get() == val_clone;
                    view! {
                        <option value=val selected=is_selected>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
