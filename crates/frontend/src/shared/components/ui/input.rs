use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Reactive error flag: renders the invalid-state border
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Maximum input length
    #[prop(optional)]
    max_length: Option<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        let error_class = if error.get().unwrap_or(false) {
            "form__input--error"
        } else {
            ""
        };
        format!(
            "form__input {} {}",
            error_class,
            class.get().unwrap_or_default()
        )
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {required.then(|| view! { <span class="form__required">{"* "}</span> })}
                    {l}
                </label>
            })}
            <input
                class=input_class
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                maxlength=max_length.map(|n| n.to_string())
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
