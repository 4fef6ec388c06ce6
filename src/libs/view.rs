use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TITLE", "COMMENT", "REPEAT"]);
        for task in tasks {
            table.add_row(row![task.id, task.date, task.title, task.comment, task.repeat]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["DATE", task.date]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["COMMENT", task.comment]);
        table.add_row(row!["REPEAT", task.repeat]);
        table.printstd();

        Ok(())
    }

    /// Pretty-printed JSON for `--json` output.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);

        Ok(())
    }
}
