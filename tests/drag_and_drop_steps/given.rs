//! Given steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{first}" and "{second}""#)]
fn board_with_columns(world: &mut DragWorld, first: String, second: String) {
    *world = DragWorld::with_columns(vec![first, second]);
}

#[given(r#"a task "{content}" in column "{column}""#)]
fn task_in_column(
    world: &mut DragWorld,
    content: String,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = world.column_id(&column)?;
    world.store.add_task(column_id, content);
    Ok(())
}
