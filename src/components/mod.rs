//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod row_mode;
mod todo_lists;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use row_mode::RowMode;
pub use todo_lists::TodoLists;
pub use todo_row::TodoRow;
