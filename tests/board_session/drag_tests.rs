//! Drag lifecycle against a seeded board.

use std::sync::Arc;

use kanban_board::{
    board::{adapters::RecordingListener, domain::BoardChange, services::BoardStore},
    drag::{DragEvent, DragInteractionHandler, DragItem, DragOutcome, DragOver, ItemKind},
};
use rstest::rstest;

use super::helpers::{check_invariants, column_named, seeded_store, task_order};

#[rstest]
fn dragging_across_columns_reassigns_incrementally(
    mut seeded_store: BoardStore,
) -> eyre::Result<()> {
    let todo = column_named(&seeded_store, "To Do")?;
    let doing = column_named(&seeded_store, "In Progress")?;
    let done = column_named(&seeded_store, "Done")?;
    let card = seeded_store.add_task(todo.clone(), "card");
    let anchor = seeded_store.add_task(doing.clone(), "anchor");
    let recorder = Arc::new(RecordingListener::new());
    seeded_store.subscribe(recorder.clone());
    let dragged = seeded_store
        .task(&card)
        .cloned()
        .ok_or_else(|| eyre::eyre!("card should exist"))?;
    let card_id = card.clone().into_inner();

    let mut drag = DragInteractionHandler::new();
    drag.handle(&mut seeded_store, DragEvent::Start(DragItem::Task(dragged)));
    let over_anchor = drag.handle(
        &mut seeded_store,
        DragEvent::Over(DragOver::task_over_task(
            card_id.clone(),
            anchor.clone().into_inner(),
        )),
    );
    let over_done = drag.handle(
        &mut seeded_store,
        DragEvent::Over(DragOver::task_over_column(
            card_id.clone(),
            done.clone().into_inner(),
        )),
    );
    drag.handle(
        &mut seeded_store,
        DragEvent::Over(DragOver::task_over_column(card_id, done.clone().into_inner())),
    );
    drag.handle(&mut seeded_store, DragEvent::End);

    eyre::ensure!(matches!(over_anchor, DragOutcome::Moved { ref to, .. } if *to == doing));
    eyre::ensure!(matches!(over_done, DragOutcome::Moved { ref to, .. } if *to == done));
    eyre::ensure!(seeded_store.task(&card).map(|t| t.column_id()) == Some(&done));
    eyre::ensure!(task_order(&seeded_store.snapshot()) == vec![card, anchor]);
    eyre::ensure!(drag.active_task().is_none());
    check_invariants(&seeded_store.snapshot())?;

    let moves = recorder
        .changes()
        .into_iter()
        .filter(|change| matches!(change, BoardChange::TaskMoved { .. }))
        .count();
    eyre::ensure!(moves == 2, "expected two effective moves, saw {moves}");
    Ok(())
}

#[rstest]
fn column_drags_never_touch_the_board(mut seeded_store: BoardStore) -> eyre::Result<()> {
    let todo = column_named(&seeded_store, "To Do")?;
    let done = column_named(&seeded_store, "Done")?;
    let column = seeded_store
        .column(&todo)
        .cloned()
        .ok_or_else(|| eyre::eyre!("column should exist"))?;
    let before = seeded_store.snapshot();

    let mut drag = DragInteractionHandler::new();
    drag.drag_start(DragItem::Column(column));
    let outcome = DragInteractionHandler::drag_over(
        &mut seeded_store,
        &DragOver::new(
            todo.into_inner(),
            ItemKind::Column,
            done.into_inner(),
            ItemKind::Column,
        ),
    );
    drag.drag_end();

    eyre::ensure!(outcome == DragOutcome::Ignored);
    eyre::ensure!(Arc::ptr_eq(&before, &seeded_store.snapshot()));
    Ok(())
}
