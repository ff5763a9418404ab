use leptos::prelude::*;

/// Radio group component: a labelled row of radio options
#[component]
pub fn RadioGroup(
    /// Label for the group
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <div class="form__radio-group">
                {options.into_iter().map(|(val, lbl)| {
                    let val_for_check = val.clone();
                    let val_for_change = val.clone();
                    let is_checked = move || value.get() == val_for_check;
                    view! {
                        <label class="form__radio-wrapper">
                            <input
                                type="radio"
                                class="form__radio"
                                name=name.clone()
                                value=val
                                checked=is_checked
                                on:change=move |_| {
                                    if let Some(handler) = on_change {
                                        handler.run(val_for_change.clone());
                                    }
                                }
                            />
                            <span class="form__radio-label">{lbl}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
