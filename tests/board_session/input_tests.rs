//! Validation layer in front of the store.

use kanban_board::board::{
    domain::BoardDomainError,
    services::{BoardConfig, BoardInput, BoardStore},
};
use mockable::DefaultClock;
use rstest::rstest;

use super::helpers::{check_invariants, column_named, seeded_store};

#[rstest]
fn ui_flow_adds_validated_entries(mut seeded_store: BoardStore) -> eyre::Result<()> {
    let mut input = BoardInput::from_config(DefaultClock, &BoardConfig::default());

    let rejected = input.submit_column(&mut seeded_store, "    ");
    eyre::ensure!(rejected == Err(BoardDomainError::EmptyColumnTitle));
    eyre::ensure!(input.notice().is_some());

    let review = input.submit_column(&mut seeded_store, " Review ")?;
    eyre::ensure!(input.notice().is_none());
    eyre::ensure!(column_named(&seeded_store, "Review")? == review);

    let task = input.submit_task(&mut seeded_store, &review, " check copy ")?;
    eyre::ensure!(input.submit_task(&mut seeded_store, &review, "").is_err());
    eyre::ensure!(input.submit_task_edit(&mut seeded_store, &task, "check copy twice ")?);

    let contents: Vec<&str> = seeded_store.tasks_in(&review).map(|t| t.content()).collect();
    eyre::ensure!(contents == vec!["check copy twice "]);
    check_invariants(&seeded_store.snapshot())
}

#[rstest]
fn container_accepts_what_the_input_layer_rejects(mut seeded_store: BoardStore) {
    let empty = seeded_store.add_column("");
    let task = seeded_store.add_task(empty.clone(), "");

    assert_eq!(seeded_store.column(&empty).map(|c| c.title()), Some(""));
    assert_eq!(seeded_store.task(&task).map(|t| t.content()), Some(""));
}
