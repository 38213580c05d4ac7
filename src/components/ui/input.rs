use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

const FIELD_BASE: &str = "w-full bg-transparent placeholder:text-gray-400 focus:outline-none";

/// Single-line text field bound to a signal.
///
/// Wired by hand (`prop:value` + `on:input`) instead of `bind:value`.
#[component]
pub fn TextInput(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(optional)] autofocus: bool,
    #[prop(into)] bind_value: RwSignal<String>,
    /// Called with the new value after every keystroke.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_BASE, class);

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        bind_value.set(value.clone());
        if let Some(cb) = on_change {
            cb.run(value);
        }
    };

    view! {
        <input
            type=r#type
            class=merged_class
            placeholder=placeholder
            autofocus=autofocus
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}

/// Multi-line variant used for note bodies.
#[component]
pub fn TextArea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] rows: Signal<u32>,
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_BASE, "resize-none", class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(area) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            bind_value.set(area.value());
        }
    };

    view! {
        <textarea
            class=merged_class
            placeholder=placeholder
            rows=move || rows.get().to_string()
            prop:value=move || bind_value.get()
            on:input=on_input
            on:focus=move |_| {
                if let Some(cb) = on_focus {
                    cb.run(());
                }
            }
        />
    }
}
