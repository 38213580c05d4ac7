use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextInput};
use crate::models::ViewType;
use crate::state::{NotesAction, NotesContext};
use icons::{Archive, LayoutGrid, List, Search};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let notes = expect_context::<NotesContext>();

    let show_archived = move || notes.with(|s| s.show_archived);
    let view_type = move || notes.with(|s| s.view_type);

    // Local mirror of the query so the field keeps its caret while typing.
    let query: RwSignal<String> =
        RwSignal::new(notes.with_untracked(|s| s.search_query.clone()));
    let on_query = Callback::new(move |q: String| {
        notes.dispatch(NotesAction::SetSearchQuery(q));
    });

    view! {
        <header class="sticky top-0 z-50 border-b border-gray-200 bg-white">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <h1 class="ml-4 truncate text-xl font-semibold text-gray-900">
                        {move || if show_archived() { "Archived Notes" } else { "Keep Notes" }}
                    </h1>

                    <div class="mx-4 max-w-2xl flex-1 lg:mx-8">
                        <div class="relative">
                            <div class="pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3">
                                <Search class="size-5 text-gray-400" />
                            </div>
                            <TextInput
                                class="block rounded-lg border border-gray-300 bg-gray-50 py-2 pl-10 pr-3 focus:border-transparent focus:ring-2 focus:ring-blue-500"
                                placeholder="Search notes"
                                bind_value=query
                                on_change=on_query
                            />
                        </div>
                    </div>

                    <div class="flex items-center gap-2">
                        {move || {
                            let (variant, title) = if show_archived() {
                                (ButtonVariant::Active, "Show active notes")
                            } else {
                                (ButtonVariant::Muted, "Show archived notes")
                            };
                            view! {
                                <Button
                                    variant=variant
                                    size=ButtonSize::IconLg
                                    attr:title=title
                                    on:click=move |_| notes.dispatch(NotesAction::ToggleArchivedView)
                                >
                                    <Archive />
                                </Button>
                            }
                        }}
                        <Button
                            variant=ButtonVariant::Muted
                            size=ButtonSize::IconLg
                            attr:title=move || {
                                match view_type() {
                                    ViewType::Grid => "Show as list",
                                    ViewType::List => "Show as grid",
                                }
                            }
                            on:click=move |_| notes.dispatch(NotesAction::ToggleViewType)
                        >
                            {move || match view_type() {
                                ViewType::Grid => view! { <List /> }.into_any(),
                                ViewType::List => view! { <LayoutGrid /> }.into_any(),
                            }}
                        </Button>
                    </div>
                </div>
            </div>
        </header>
    }
}
