use crate::components::ui::Spinner;
use crate::components::{ErrorBanner, Header, NoteEditor, NoteGrid};
use crate::config::EnvConfig;
use crate::state::NotesContext;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

#[component]
pub fn App() -> impl IntoView {
    let config = EnvConfig::from_window();
    let notes = NotesContext::new(&config);
    provide_context(notes);

    // The store lives for the whole page; retry any failed write on the way out.
    let _pagehide = window_event_listener(ev::pagehide, move |_ev: web_sys::PageTransitionEvent| {
        notes.flush();
    });

    let is_loading = move || notes.with(|s| s.is_loading);
    let show_archived = move || notes.with(|s| s.show_archived);

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <main>
                <ErrorBanner />
                <Show
                    when=move || !is_loading()
                    fallback=|| view! {
                        <div class="flex justify-center py-8">
                            <Spinner class="size-6 text-gray-400" />
                        </div>
                    }
                >
                    <Show when=move || !show_archived() fallback=|| ().into_view()>
                        <NoteEditor />
                    </Show>
                    <NoteGrid />
                </Show>
            </main>
        </div>
    }
}
