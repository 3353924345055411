//! Todo Lists Component
//!
//! The two rendered columns, pending and completed, derived from the
//! same list snapshot.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::lists::partition_todos;
use crate::models::Todo;

/// Both todo columns
#[component]
pub fn TodoLists(todos: ReadSignal<Vec<Todo>>) -> impl IntoView {
    let pending = Signal::derive(move || partition_todos(&todos.get()).0);
    let completed = Signal::derive(move || partition_todos(&todos.get()).1);

    view! {
        <div class="todo-lists">
            <TodoColumn title="Pending" list_class="pending-list" todos=pending />
            <TodoColumn title="Completed" list_class="completed-list" todos=completed />
        </div>
    }
}

/// One column: heading, rows, and a placeholder when there are none
#[component]
fn TodoColumn(
    title: &'static str,
    list_class: &'static str,
    todos: Signal<Vec<Todo>>,
) -> impl IntoView {
    view! {
        <section class="todo-column">
            <h2>{title}</h2>
            <ul class=list_class>
                <For
                    each=move || todos.get()
                    key=|todo| {
                        // Tuple of all mutable fields so changes re-render the row
                        (todo.id, todo.content.clone(), todo.completed, todo.completed_time)
                    }
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
                <Show when=move || todos.get().is_empty()>
                    <h4 class="empty-placeholder">"no task to display!"</h4>
                </Show>
            </ul>
        </section>
    }
}
