use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Reactive error flag: renders the invalid-state border
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let textarea_class = move || {
        if error.get().unwrap_or(false) {
            "form__textarea form__textarea--error"
        } else {
            "form__textarea"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                </label>
            })}
            <textarea
                class=textarea_class
                placeholder=textarea_placeholder
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {value.get_untracked()}
            </textarea>
        </div>
    }
}
