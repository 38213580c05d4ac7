use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextArea, TextInput};
use crate::drafts::NoteDraft;
use crate::models::{NoteColor, NoteKind};
use crate::state::{NotesAction, NotesContext};
use crate::util::{new_id, now_iso};
use icons::{Image, List, Type};
use leptos::prelude::*;
use strum::IntoEnumIterator;

/// "Take a note..." box. Collapsed to a single line until focused.
#[component]
pub fn NoteEditor() -> impl IntoView {
    let notes = expect_context::<NotesContext>();

    let expanded = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let kind = RwSignal::new(NoteKind::Text);
    let color = RwSignal::new(NoteColor::Default);

    let reset = move || {
        title.set(String::new());
        content.set(String::new());
        image_url.set(String::new());
        kind.set(NoteKind::Text);
        color.set(NoteColor::Default);
        expanded.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = NoteDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            kind: kind.get_untracked(),
            color: color.get_untracked(),
            image_url: image_url.get_untracked(),
        };
        let Some(note) = draft.into_note(new_id(), &now_iso()) else {
            return;
        };
        tracing::info!(id = %note.id, kind = %note.kind, "note created");
        notes.dispatch(NotesAction::AddNote(note));
        reset();
    };

    let kind_button = move |k: NoteKind| {
        let icon = match k {
            NoteKind::Text => view! { <Type class="size-5 text-gray-500" /> }.into_any(),
            NoteKind::List => view! { <List class="size-5 text-gray-500" /> }.into_any(),
            NoteKind::Image => view! { <Image class="size-5 text-gray-500" /> }.into_any(),
        };
        view! {
            <button
                type="button"
                title=k.to_string()
                class=move || {
                    if kind.get() == k {
                        "rounded-full bg-gray-100 p-2 hover:bg-gray-100"
                    } else {
                        "rounded-full p-2 hover:bg-gray-100"
                    }
                }
                on:click=move |_| kind.set(k)
            >
                {icon}
            </button>
        }
    };

    let color_swatches = move || {
        NoteColor::iter()
            .map(|c| {
                view! {
                    <button
                        type="button"
                        title=c.to_string()
                        class=move || {
                            let ring = if color.get() == c { "ring-2 ring-blue-500" } else { "" };
                            format!("h-6 w-6 rounded-full border border-gray-300 {} {}", c.bg_class(), ring)
                        }
                        on:click=move |_| color.set(c)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="mx-auto mt-8 max-w-2xl px-4">
            <form
                class=move || format!("relative rounded-lg border border-gray-300 shadow-sm {}", color.get().bg_class())
                on:submit=on_submit
            >
                <Show when=move || expanded.get() fallback=|| ().into_view()>
                    <TextInput
                        class="px-4 pb-2 pt-3 text-lg font-medium"
                        placeholder="Title"
                        bind_value=title
                    />
                </Show>

                <TextArea
                    class="px-4 py-3"
                    placeholder="Take a note..."
                    rows=Signal::derive(move || if expanded.get() { 3u32 } else { 1u32 })
                    bind_value=content
                    on_focus=Callback::new(move |_| expanded.set(true))
                />

                <Show when=move || expanded.get() && kind.get() == NoteKind::Image fallback=|| ().into_view()>
                    <TextInput
                        class="px-4 pb-3 text-sm"
                        r#type="url"
                        placeholder="Image URL"
                        bind_value=image_url
                    />
                </Show>

                <Show when=move || expanded.get() fallback=|| ().into_view()>
                    <div class="flex items-center justify-between border-t border-gray-200 px-2 py-2">
                        <div class="flex items-center gap-2">
                            {kind_button(NoteKind::Text)}
                            {kind_button(NoteKind::List)}
                            {kind_button(NoteKind::Image)}
                            <div class="flex items-center gap-1">{color_swatches}</div>
                        </div>
                        <div class="flex items-center gap-2">
                            <button
                                type="button"
                                class="rounded px-4 py-1 text-sm text-gray-500 hover:bg-gray-100"
                                on:click=move |_| reset()
                            >
                                "Close"
                            </button>
                            <Button variant=ButtonVariant::Default size=ButtonSize::Sm>
                                "Save"
                            </Button>
                        </div>
                    </div>
                </Show>
            </form>
        </div>
    }
}
