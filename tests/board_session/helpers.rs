//! Shared fixtures and invariant checks for board session tests.

use std::collections::HashSet;

use kanban_board::board::{
    domain::{BoardState, ColumnId, TaskId},
    services::{BoardConfig, BoardStore},
};
use rstest::fixture;

/// Provides a board seeded with the default three columns.
#[fixture]
pub fn seeded_store() -> BoardStore {
    BoardStore::from_config(&BoardConfig::default())
}

/// Returns the identifier of the column titled `title`.
///
/// # Errors
///
/// Returns an error if no column has that title.
pub fn column_named(store: &BoardStore, title: &str) -> eyre::Result<ColumnId> {
    store
        .columns()
        .iter()
        .find(|column| column.title() == title)
        .map(|column| column.id().clone())
        .ok_or_else(|| eyre::eyre!("no column titled {title}"))
}

/// Returns the task identifiers in sequence order.
#[must_use]
pub fn task_order(state: &BoardState) -> Vec<TaskId> {
    state.tasks().iter().map(|task| task.id().clone()).collect()
}

/// Checks identifier uniqueness and that every task has a live column.
///
/// # Errors
///
/// Returns an error describing the first violated invariant.
pub fn check_invariants(state: &BoardState) -> eyre::Result<()> {
    let column_ids: HashSet<&ColumnId> = state.columns().iter().map(|c| c.id()).collect();
    eyre::ensure!(
        column_ids.len() == state.columns().len(),
        "duplicate column identifiers"
    );
    let task_ids: HashSet<&TaskId> = state.tasks().iter().map(|t| t.id()).collect();
    eyre::ensure!(
        task_ids.len() == state.tasks().len(),
        "duplicate task identifiers"
    );
    let orphans = state.orphaned_tasks().count();
    eyre::ensure!(orphans == 0, "{orphans} orphaned tasks");
    Ok(())
}
