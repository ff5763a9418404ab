use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let wrapper_class = move || {
        if disabled {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    checked=move || checked.get()
                    disabled=disabled
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                {label}
            </label>
        </div>
    }
}
