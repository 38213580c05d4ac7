use crate::components::note_card::NoteCard;
use crate::models::{Note, ViewType};
use crate::state::queries::sections;
use crate::state::NotesContext;
use leptos::prelude::*;

fn grid_class(view_type: ViewType) -> &'static str {
    match view_type {
        ViewType::Grid => "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
        ViewType::List => "mx-auto grid max-w-2xl grid-cols-1 gap-4",
    }
}

fn empty_message(show_archived: bool, has_query: bool) -> &'static str {
    if show_archived {
        "No archived notes"
    } else if has_query {
        "No matching notes found"
    } else {
        "No notes yet"
    }
}

#[component]
pub fn NoteGrid() -> impl IntoView {
    let notes = expect_context::<NotesContext>();

    let pinned = Memo::new(move |_| {
        notes.with(|s| sections(s).pinned.into_iter().cloned().collect::<Vec<Note>>())
    });
    let others = Memo::new(move |_| {
        notes.with(|s| sections(s).others.into_iter().cloned().collect::<Vec<Note>>())
    });
    let layout = move || grid_class(notes.with(|s| s.view_type));
    let has_pinned = move || pinned.with(|v| !v.is_empty());
    let has_others = move || others.with(|v| !v.is_empty());

    view! {
        <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
            <Show when=has_pinned fallback=|| ().into_view()>
                <h2 class="mb-4 text-sm font-medium text-gray-500">"PINNED"</h2>
                <div class=move || format!("{} mb-8", layout())>
                    <For
                        each=move || pinned.get()
                        key=|n| n.clone()
                        children=move |n| view! { <NoteCard note=n /> }
                    />
                </div>
            </Show>

            <Show when=has_others fallback=|| ().into_view()>
                <Show when=has_pinned fallback=|| ().into_view()>
                    <h2 class="mb-4 text-sm font-medium text-gray-500">"OTHERS"</h2>
                </Show>
                <div class=layout>
                    <For
                        each=move || others.get()
                        key=|n| n.clone()
                        children=move |n| view! { <NoteCard note=n /> }
                    />
                </div>
            </Show>

            <Show when=move || !has_pinned() && !has_others() fallback=|| ().into_view()>
                <div class="mt-8 text-center text-gray-500">
                    {move || notes.with(|s| empty_message(s.show_archived, !s.search_query.is_empty()))}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_per_view() {
        assert_eq!(empty_message(true, true), "No archived notes");
        assert_eq!(empty_message(false, true), "No matching notes found");
        assert_eq!(empty_message(false, false), "No notes yet");
    }

    #[test]
    fn test_list_layout_is_single_column() {
        assert!(grid_class(ViewType::List).contains("grid-cols-1"));
        assert!(!grid_class(ViewType::List).contains("sm:grid-cols-2"));
        assert!(grid_class(ViewType::Grid).contains("xl:grid-cols-4"));
    }
}
