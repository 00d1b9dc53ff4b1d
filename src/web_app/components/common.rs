// web_app/components/common.rs - Reusable UI components
//
// Small input primitives shared by the filter controls. They receive all
// state via props and write user input straight back into the signal.

use leptos::prelude::*;

/// Text input component
///
/// Writes to `value` on every keystroke (`input` event), not on submit.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text, shown while the value is empty
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-1 py-2 border-b border-gray-300 \
                      focus:border-blue-500 outline-none text-base";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Checkbox component
///
/// A checkbox with a clickable label.
#[component]
pub fn Checkbox(
    /// Whether the checkbox is checked
    checked: RwSignal<bool>,
    /// Label text
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 cursor-pointer">
            <input
                type="checkbox"
                class="rounded border-gray-300 text-blue-600 focus:ring-blue-500 h-4 w-4"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    checked.set(event_target_checked(&ev));
                }
            />
            <span class="text-gray-900">{label}</span>
        </label>
    }
}
