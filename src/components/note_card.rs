use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextArea, TextInput};
use crate::drafts::apply_edit;
use crate::models::{ListItem, Note, NoteKind, NotePayload};
use crate::state::queries::reorder;
use crate::state::{NotesAction, NotesContext};
use crate::util::now_iso;
use icons::{Archive, ArchiveRestore, Check, Image, List, Pencil, Pin, PinOff, Trash2, X};
use leptos::prelude::*;

const DRAG_MIME: &str = "text/plain";

#[component]
pub fn NoteCard(note: Note) -> impl IntoView {
    let notes = expect_context::<NotesContext>();

    let card_class = format!(
        "relative cursor-move rounded-lg border border-gray-300 shadow-sm transition-shadow hover:shadow-md {}",
        note.color.bg_class()
    );
    let kind = note.kind;
    let is_pinned = note.is_pinned;
    let is_archived = note.is_archived;
    let pin_title = if is_pinned { "Unpin" } else { "Pin" };
    let archive_title = if is_archived { "Unarchive" } else { "Archive" };
    let note_sv = StoredValue::new(note);

    let editing = RwSignal::new(false);
    let edited_title = RwSignal::new(String::new());
    let edited_content = RwSignal::new(String::new());

    let start_edit = move |_| {
        note_sv.with_value(|n| {
            edited_title.set(n.title.clone());
            edited_content.set(n.content.clone());
        });
        editing.set(true);
    };

    let save_edit = move |_| {
        let edited = note_sv.with_value(|n| {
            apply_edit(
                n,
                &edited_title.get_untracked(),
                &edited_content.get_untracked(),
                &now_iso(),
            )
        });
        notes.dispatch(NotesAction::UpdateNote(edited));
        editing.set(false);
    };

    let toggle_pin = move |_| {
        let next = note_sv.with_value(Note::with_pinned_toggled);
        notes.dispatch(NotesAction::UpdateNote(next));
    };

    let toggle_archive = move |_| {
        let next = note_sv.with_value(Note::with_archived_toggled);
        notes.dispatch(NotesAction::UpdateNote(next));
    };

    let delete = move |_| {
        let id = note_sv.with_value(|n| n.id.clone());
        tracing::info!(%id, "note deleted");
        notes.dispatch(NotesAction::DeleteNote(id));
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();

        let dragged_id = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_MIME).ok())
            .unwrap_or_default();
        if dragged_id.trim().is_empty() {
            return;
        }

        let target_id = note_sv.with_value(|n| n.id.clone());
        let next = notes.with_untracked(|s| reorder(&s.notes, &dragged_id, &target_id));
        if let Some(next) = next {
            notes.dispatch(NotesAction::SetNotes(next));
        }
    };

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=move |ev: web_sys::DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data(DRAG_MIME, &note_sv.with_value(|n| n.id.clone()));
                    dt.set_effect_allowed("move");
                }
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if let Some(dt) = ev.data_transfer() {
                    dt.set_drop_effect("move");
                }
            }
            on:drop=on_drop
        >
            <div class="p-4">
                <Show
                    when=move || editing.get()
                    fallback=move || note_sv.with_value(|n| note_content(n, notes))
                >
                    <div class="space-y-2">
                        <TextInput
                            class="rounded border border-gray-300 px-2 py-1 focus:ring-2 focus:ring-blue-500"
                            placeholder="Title"
                            bind_value=edited_title
                            autofocus=true
                        />
                        <TextArea
                            class="rounded border border-gray-300 px-2 py-1 focus:ring-2 focus:ring-blue-500"
                            placeholder="Take a note..."
                            rows=Signal::derive(|| 3u32)
                            bind_value=edited_content
                        />
                    </div>
                </Show>
            </div>

            <div class="flex flex-wrap items-center justify-between gap-2 border-t border-gray-200 p-2">
                {match kind {
                    NoteKind::Image => view! { <Image class="size-4 text-gray-400" /> }.into_any(),
                    NoteKind::List => view! { <List class="size-4 text-gray-400" /> }.into_any(),
                    NoteKind::Text => ().into_any(),
                }}
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class="flex flex-wrap gap-1">
                            <Button variant=ButtonVariant::Muted size=ButtonSize::Icon attr:title="Edit" on:click=start_edit>
                                <Pencil />
                            </Button>
                            <Button
                                variant=ButtonVariant::Muted
                                size=ButtonSize::Icon
                                attr:title=pin_title
                                on:click=toggle_pin
                            >
                                {if is_pinned { view! { <PinOff /> }.into_any() } else { view! { <Pin /> }.into_any() }}
                            </Button>
                            <Button
                                variant=ButtonVariant::Muted
                                size=ButtonSize::Icon
                                attr:title=archive_title
                                on:click=toggle_archive
                            >
                                {if is_archived {
                                    view! { <ArchiveRestore /> }.into_any()
                                } else {
                                    view! { <Archive /> }.into_any()
                                }}
                            </Button>
                            <Button variant=ButtonVariant::Muted size=ButtonSize::Icon attr:title="Delete" on:click=delete>
                                <Trash2 />
                            </Button>
                        </div>
                    }
                >
                    <div class="flex w-full flex-wrap gap-2">
                        <Button variant=ButtonVariant::Success size=ButtonSize::Icon attr:title="Save" on:click=save_edit>
                            <Check />
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            size=ButtonSize::Icon
                            attr:title="Cancel"
                            on:click=move |_| editing.set(false)
                        >
                            <X />
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn note_content(note: &Note, notes: NotesContext) -> impl IntoView {
    let title = (!note.title.is_empty()).then(|| {
        view! { <h3 class="mb-2 text-lg font-medium text-gray-900">{note.title.clone()}</h3> }
    });
    view! {
        {title}
        <div class="text-gray-700">{note_body(note, notes)}</div>
    }
}

/// Read-only body for the card, chosen by the note's kind.
fn note_body(note: &Note, notes: NotesContext) -> AnyView {
    match note.payload() {
        NotePayload::Text(text) => {
            view! { <p class="whitespace-pre-wrap">{text.to_string()}</p> }.into_any()
        }
        NotePayload::Image { url, caption } => {
            let img = url.map(|u| {
                view! { <img src=u.to_string() alt="" class="mb-2 h-48 w-full rounded object-cover" /> }
            });
            let caption = caption.to_string();
            view! {
                {img}
                <p class="whitespace-pre-wrap">{caption}</p>
            }
            .into_any()
        }
        NotePayload::List(items) => {
            let rows = items
                .iter()
                .map(|item| checklist_row(note, item, notes))
                .collect_view();
            view! { <ul class="space-y-1">{rows}</ul> }.into_any()
        }
    }
}

fn checklist_row(note: &Note, item: &ListItem, notes: NotesContext) -> impl IntoView {
    let owner = note.clone();
    let item_id = item.id.clone();
    let completed = item.completed;
    let text_class = if completed { "line-through text-gray-500" } else { "" };

    view! {
        <li class="flex items-center gap-2">
            <input
                type="checkbox"
                class="rounded text-blue-500"
                prop:checked=completed
                on:change=move |_| {
                    let next = owner.with_list_item_toggled(&item_id, &now_iso());
                    notes.dispatch(NotesAction::UpdateNote(next));
                }
            />
            <span class=text_class>{item.text.clone()}</span>
        </li>
    }
}
