//! List Partition Helpers
//!
//! Pure functions that split the flat todo list into the two rendered
//! columns. Kept free of any view code so they can be tested directly.

use std::cmp::Reverse;

use crate::models::Todo;

/// Split todos into (pending, completed).
///
/// Pending todos keep the order they have in the list. Completed todos are
/// sorted most recently completed first; records without a completion time
/// sort last, keeping their relative order.
pub fn partition_todos(todos: &[Todo]) -> (Vec<Todo>, Vec<Todo>) {
    let (mut completed, pending): (Vec<Todo>, Vec<Todo>) =
        todos.iter().cloned().partition(|todo| todo.completed);

    completed.sort_by_key(|todo| Reverse(todo.completed_time));

    (pending, completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn todo(id: u32, completed: bool, completed_time: Option<DateTime<Utc>>) -> Todo {
        Todo {
            id,
            content: format!("todo {id}"),
            completed,
            completed_time,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn every_todo_lands_in_exactly_one_partition() {
        let todos = vec![
            todo(1, false, None),
            todo(2, true, Some(at(9))),
            todo(3, false, None),
            todo(4, true, Some(at(11))),
        ];

        let (pending, completed) = partition_todos(&todos);

        assert_eq!(pending.len() + completed.len(), todos.len());
        let mut ids: Vec<u32> = pending.iter().chain(&completed).map(|t| t.id).collect();
        ids.sort();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert!(pending.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
    }

    #[test]
    fn pending_todos_keep_their_list_order() {
        let todos = vec![
            todo(5, false, None),
            todo(2, true, Some(at(9))),
            todo(9, false, None),
            todo(1, false, None),
        ];

        let (pending, _) = partition_todos(&todos);

        let ids: Vec<u32> = pending.iter().map(|t| t.id).collect();
        assert_eq!(ids, [5, 9, 1]);
    }

    #[test]
    fn completed_todos_sort_most_recent_first() {
        let todos = vec![
            todo(1, true, Some(at(8))),
            todo(2, true, Some(at(14))),
            todo(3, true, Some(at(11))),
        ];

        let (_, completed) = partition_todos(&todos);

        let ids: Vec<u32> = completed.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 1]);

        let times: Vec<_> = completed.iter().map(|t| t.completed_time).collect();
        assert!(times.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn completed_todos_without_a_time_sort_last_in_stable_order() {
        let todos = vec![
            todo(1, true, None),
            todo(2, true, Some(at(10))),
            todo(3, true, None),
        ];

        let (_, completed) = partition_todos(&todos);

        let ids: Vec<u32> = completed.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[test]
    fn empty_input_yields_two_empty_partitions() {
        let (pending, completed) = partition_todos(&[]);
        assert!(pending.is_empty());
        assert!(completed.is_empty());
    }
}
