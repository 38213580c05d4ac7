use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, ButtonVariant};
use crate::state::{NotesAction, NotesContext};
use icons::X;
use leptos::prelude::*;

/// Non-fatal storage errors. The rest of the UI keeps working underneath.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let notes = expect_context::<NotesContext>();
    let error = move || notes.with(|s| s.error.clone());

    view! {
        <Show when=move || error().is_some() fallback=|| ().into_view()>
            <div class="mx-auto mt-4 max-w-2xl px-4">
                <Alert class="border-red-300 bg-red-50 text-red-700">
                    <AlertDescription>{move || error().unwrap_or_default()}</AlertDescription>
                    <Button
                        variant=ButtonVariant::Danger
                        size=ButtonSize::Icon
                        attr:title="Dismiss"
                        on:click=move |_| notes.dispatch(NotesAction::ClearError)
                    >
                        <X />
                    </Button>
                </Alert>
            </div>
        </Show>
    }
}
