//! Ticklist Frontend App
//!
//! Main application component: submit form on top, pending and
//! completed columns below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTodoForm, TodoLists};
use crate::models::Todo;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = TodoStore::new();
    let (todos, set_todos) = signal(Vec::<Todo>::new());

    // The rendered list follows the store through its one subscription
    store.subscribe(move |current| set_todos.set(current.to_vec()));

    // Provide the store to all children
    provide_context(store.clone());

    // Load the collection on mount; newest records go on top
    Effect::new(move |_| {
        let store = store.clone();
        spawn_local(async move {
            match api::list_todos().await {
                Ok(mut loaded) => {
                    loaded.reverse();
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", loaded.len()).into());
                    store.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Error loading todos: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <h1>"Ticklist"</h1>

            // Top: submit form
            <NewTodoForm />

            // Below: the two columns
            <TodoLists todos=todos />

            <p class="todo-count">{move || format!("{} tasks", todos.get().len())}</p>
        </div>
    }
}
