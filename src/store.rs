//! Task List State
//!
//! The single owner of the in-memory todo list. Replacing the list through
//! [`TodoStore::set`] is the only mutation entry point, and it always
//! notifies the registered observer, so the view can never miss a change.

use std::sync::{Arc, Mutex, MutexGuard};

use leptos::prelude::*;

use crate::models::Todo;

type ChangeFn = Arc<dyn Fn(&[Todo]) + Send + Sync>;

#[derive(Default)]
struct Inner {
    todos: Mutex<Vec<Todo>>,
    on_change: Mutex<Option<ChangeFn>>,
}

/// Shared handle to the todo list state
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<Inner>,
}

/// Get the store handle from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current list
    pub fn get(&self) -> Vec<Todo> {
        self.todos().clone()
    }

    /// Replace the list wholesale and notify the observer
    pub fn set(&self, todos: Vec<Todo>) {
        *self.todos() = todos;
        let on_change = self
            .inner
            .on_change
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(on_change) = on_change {
            on_change(&self.get());
        }
    }

    /// Register the observer called after every `set`. Registering again
    /// replaces the previous observer; there is never more than one.
    pub fn subscribe(&self, on_change: impl Fn(&[Todo]) + Send + Sync + 'static) {
        *self
            .inner
            .on_change
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(on_change));
    }

    // ========================
    // Store Helper Functions
    // ========================

    /// Put a freshly created todo at the front of the list
    pub fn prepend(&self, todo: Todo) {
        let mut todos = self.get();
        todos.insert(0, todo);
        self.set(todos);
    }

    /// Drop the todo with the given id
    pub fn remove(&self, id: u32) {
        let mut todos = self.get();
        todos.retain(|todo| todo.id != id);
        self.set(todos);
    }

    /// Swap in an updated record by id; ids that are no longer present
    /// leave the list unchanged
    pub fn replace(&self, updated: Todo) {
        let mut todos = self.get();
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
            *todo = updated;
        }
        self.set(todos);
    }

    fn todos(&self) -> MutexGuard<'_, Vec<Todo>> {
        self.inner.todos.lock().unwrap_or_else(|e| e.into_inner())
    }
}
