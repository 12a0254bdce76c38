// =============================================================================
// EduSphere Web - Form Components
// =============================================================================

use leptos::prelude::*;

/// Text input field with label.
///
/// Value and change handling are split so the field can be driven by any
/// source of truth - a plain signal or a URL query binding.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <input
                type="text"
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |e| {
                    on_input.run(event_target_value(&e));
                }
            />
        </div>
    }
}
