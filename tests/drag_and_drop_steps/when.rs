//! When steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::when;

#[when(r#"the task "{content}" is dragged over column "{column}""#)]
fn dragged_over_column(
    world: &mut DragWorld,
    content: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task = world.ensure_dragging(&content)?;
    let target = world.column_id(&column)?;
    world.hover(&task, target.into_inner(), false);
    Ok(())
}

#[when(r#"the task "{content}" is dragged over task "{other}""#)]
fn dragged_over_task(
    world: &mut DragWorld,
    content: String,
    other: String,
) -> Result<(), eyre::Report> {
    let task = world.ensure_dragging(&content)?;
    let target = world.task_id(&other)?;
    world.hover(&task, target.into_inner(), true);
    Ok(())
}

#[when(r#"the task "{content}" hovers over column "{column}" {times:u64} times"#)]
fn hovers_repeatedly(
    world: &mut DragWorld,
    content: String,
    column: String,
    times: u64,
) -> Result<(), eyre::Report> {
    let task = world.ensure_dragging(&content)?;
    let target = world.column_id(&column)?;
    for _ in 0..times {
        world.hover(&task, target.clone().into_inner(), false);
    }
    world.drag.drag_end();
    Ok(())
}

#[when("the drag ends")]
fn drag_ends(world: &mut DragWorld) -> Result<(), eyre::Report> {
    world
        .drag
        .drag_end()
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("no drag was in progress"))
}

#[when(r#"the column "{column}" is deleted"#)]
fn column_deleted(world: &mut DragWorld, column: String) -> Result<(), eyre::Report> {
    let column_id = world.column_id(&column)?;
    eyre::ensure!(
        world.store.delete_column(&column_id),
        "column {column} was not deleted"
    );
    Ok(())
}
