//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskboard::{
    task::{
        domain::{NewTask, Task, TaskPriority, TaskTitle},
        ports::TaskRepository,
    },
    user::{
        domain::{AuthSubject, User},
        ports::UserRepository,
    },
};

#[given(r#"a registered user "{name}""#)]
fn registered_user(world: &mut TaskBoardWorld, name: String) -> Result<(), eyre::Report> {
    let user = User::new(AuthSubject::new(name.as_str())?, &DefaultClock);
    run_async(world.users.store(&user)).wrap_err("store scenario user")?;
    world.registered.insert(name, user);
    Ok(())
}

#[given(r#""{name}" has a task titled "{title}""#)]
fn user_has_task(world: &mut TaskBoardWorld, name: String, title: String) -> Result<(), eyre::Report> {
    let owner = world
        .registered
        .get(&name)
        .ok_or_else(|| eyre::eyre!("user {name} is not registered in scenario world"))?;
    let task = Task::new(
        owner.id(),
        NewTask::new(TaskTitle::new(title)?, TaskPriority::Medium),
        &DefaultClock,
    );
    run_async(world.tasks.store(&task)).wrap_err("seed scenario task")?;
    world.last_task_id = Some(task.id());
    Ok(())
}
