//! Todo Row Component
//!
//! Individual row in a todo column, with inline edit, delete, and
//! complete controls.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::RowMode;
use crate::api::{self, UpdateTodoArgs};
use crate::models::Todo;
use crate::store::use_todo_store;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let content = todo.content.clone();

    let (mode, set_mode) = signal(RowMode::Viewing);
    let (draft, set_draft) = signal(todo.content.clone());

    // The completed flag carried here is the rendered one; the server
    // response is what actually lands in the store.
    let toggle_store = store.clone();
    let toggle_completed = move |_: web_sys::MouseEvent| {
        let store = toggle_store.clone();
        spawn_local(async move {
            let args = UpdateTodoArgs {
                completed: Some(!completed),
                completed_time: Some(Utc::now()),
                ..Default::default()
            };
            match api::update_todo(id, &args).await {
                Ok(updated) => store.replace(updated),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Row] Error toggling {}: {}", id, e).into());
                }
            }
        });
    };

    // First click opens the edit box, second click persists the draft.
    // On failure the box stays open with the draft intact.
    let edit_store = store.clone();
    let edit_todo = move |_: web_sys::MouseEvent| match mode.get() {
        RowMode::Viewing => set_mode.set(RowMode::Editing),
        RowMode::Editing => {
            let content = draft.get();
            let store = edit_store.clone();
            spawn_local(async move {
                let args = UpdateTodoArgs {
                    content: Some(&content),
                    ..Default::default()
                };
                match api::update_todo(id, &args).await {
                    Ok(updated) => {
                        store.replace(updated);
                        set_mode.set(RowMode::Viewing);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[Row] Error editing {}: {}", id, e).into(),
                        );
                    }
                }
            });
        }
    };

    let delete_store = store.clone();
    let delete_todo = move |_: web_sys::MouseEvent| {
        let store = delete_store.clone();
        spawn_local(async move {
            match api::delete_todo(id).await {
                Ok(()) => store.remove(id),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Row] Error deleting {}: {}", id, e).into());
                }
            }
        });
    };

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            // Back-to-pending toggle (completed rows lead with it)
            {completed.then(|| view! {
                <button
                    class="complete-btn"
                    data-id=id.to_string()
                    on:click=toggle_completed.clone()
                >"←"</button>
            })}

            // Content label or edit box
            {move || match mode.get() {
                RowMode::Viewing => view! {
                    <span class="content">{content.clone()}</span>
                }.into_any(),
                RowMode::Editing => view! {
                    <input
                        type="text"
                        class="edit-input"
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.set(input.value());
                        }
                    />
                }.into_any(),
            }}

            <button class="edit-btn" data-id=id.to_string() on:click=edit_todo>"✎"</button>
            <button class="delete-btn" data-id=id.to_string() on:click=delete_todo>"×"</button>

            // Mark-completed toggle (pending rows end with it)
            {(!completed).then(|| view! {
                <button
                    class="complete-btn"
                    data-id=id.to_string()
                    on:click=toggle_completed
                >"→"</button>
            })}
        </li>
    }
}
