//! New Todo Form Component
//!
//! Single-field form for submitting a new todo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateTodoArgs};
use crate::store::use_todo_store;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (new_content, set_new_content) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_content.get();
        if content.is_empty() { return; }
        let store = store.clone();

        spawn_local(async move {
            let args = CreateTodoArgs {
                content: &content,
                completed: false,
            };
            match api::create_todo(&args).await {
                Ok(created) => {
                    store.prepend(created);
                    set_new_content.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Form] Error creating todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                class="input"
                placeholder="Add new task..."
                prop:value=move || new_content.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_content.set(input.value());
                }
            />
            <button type="submit" class="submit-btn">"Add"</button>
        </form>
    }
}
