//! Task management commands.
//!
//! Each subcommand mirrors one task operation: add, list, show, update,
//! done and delete. The store handle is opened once and passed to the
//! handlers, which call into the lifecycle policy with today's date.
//!
//! With `--json` the output uses the wire shapes: a task object, `{"tasks": [..]}`,
//! `{"id": ".."}`, `{}` for operations without data and `{"error": ".."}` on failure.

use super::Rendered;
use crate::{
    db::{store::TaskStore, tasks::Tasks},
    libs::{
        config::Config,
        date::{self, format_date},
        lifecycle::{add_task, complete_task, due_tasks, update_task, Completion, DueTasks},
        messages::Message,
        task::{EmptyResponse, ErrorResponse, IdResponse, Task, TasksResponse},
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Create a task")]
    Add(TaskFields),
    #[command(about = "List upcoming tasks")]
    List,
    #[command(about = "Show a single task")]
    Show { id: String },
    #[command(about = "Replace all fields of a task")]
    Update {
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    #[command(about = "Mark a task done")]
    Done { id: String },
    #[command(about = "Delete a task")]
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct TaskFields {
    #[arg(short, long)]
    title: String,
    /// Due date as YYYYMMDD, today if omitted
    #[arg(short, long, default_value = "")]
    date: String,
    #[arg(short, long, default_value = "")]
    comment: String,
    /// Repeat rule: "d <1-400>" or "y"
    #[arg(short, long, default_value = "")]
    repeat: String,
}

impl TaskFields {
    fn into_task(self, id: String) -> Task {
        Task {
            id,
            date: self.date,
            title: self.title,
            comment: self.comment,
            repeat: self.repeat,
        }
    }
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let json = args.json;

    match run(args) {
        Err(err) if json => {
            View::json(&ErrorResponse::new(&err))?;
            Err(err.context(Rendered))
        }
        result => result,
    }
}

fn run(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let store = Tasks::new()?;
    let today = date::today();
    let json = args.json;

    match args.command {
        TaskCommand::Add(fields) => handle_add(&store, fields, today, json),
        TaskCommand::List => handle_list(&store, today, config.max_tasks(), json),
        TaskCommand::Show { id } => handle_show(&store, &id, json),
        TaskCommand::Update { id, fields } => handle_update(&store, id, fields, today, json),
        TaskCommand::Done { id } => handle_done(&store, &id, today, json),
        TaskCommand::Delete { id, yes } => handle_delete(&store, &id, yes, json),
    }
}

fn handle_add(store: &dyn TaskStore, fields: TaskFields, today: NaiveDate, json: bool) -> Result<()> {
    let id = add_task(store, fields.into_task(String::new()), today)?;

    if json {
        return View::json(&IdResponse { id });
    }
    msg_success!(Message::TaskCreated(id));
    Ok(())
}

fn handle_list(store: &dyn TaskStore, today: NaiveDate, limit: usize, json: bool) -> Result<()> {
    let DueTasks { tasks, truncated } = due_tasks(store, today, limit)?;

    if json {
        return View::json(&TasksResponse { tasks });
    }
    if tasks.is_empty() {
        msg_info!(Message::NoDueTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(format_date(today)), true);
    View::tasks(&tasks)?;
    if truncated {
        msg_warning!(Message::ListTruncated(limit));
    }
    Ok(())
}

fn handle_show(store: &dyn TaskStore, id: &str, json: bool) -> Result<()> {
    let task = store.find_by_id(id)?;

    if json {
        return View::json(&task);
    }
    msg_print!(Message::TaskDetailsHeader(task.id.clone()));
    View::task(&task)
}

fn handle_update(store: &dyn TaskStore, id: String, fields: TaskFields, today: NaiveDate, json: bool) -> Result<()> {
    let task = update_task(store, fields.into_task(id), today)?;

    if json {
        return View::json(&EmptyResponse::default());
    }
    msg_success!(Message::TaskUpdated(task.id));
    Ok(())
}

fn handle_done(store: &dyn TaskStore, id: &str, today: NaiveDate, json: bool) -> Result<()> {
    let completion = complete_task(store, id, today)?;

    if json {
        return View::json(&EmptyResponse::default());
    }
    match completion {
        Completion::Removed => msg_success!(Message::TaskCompleted(id.to_string())),
        Completion::Rescheduled(task) => msg_success!(Message::TaskRescheduled(task.id, task.date)),
    }
    Ok(())
}

fn handle_delete(store: &dyn TaskStore, id: &str, yes: bool, json: bool) -> Result<()> {
    if !yes && !json {
        let task = store.find_by_id(id)?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    store.remove(id)?;

    if json {
        return View::json(&EmptyResponse::default());
    }
    msg_success!(Message::TaskDeleted(id.to_string()));
    Ok(())
}
