use crate::libs::{
    date::{self, format_date, parse_date},
    error::TaskError,
    messages::Message,
    repeat::next_date,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NextDateArgs {
    /// Reference day as YYYYMMDD, today if omitted
    #[arg(long)]
    now: Option<String>,
    /// Anchor date as YYYYMMDD
    #[arg(long)]
    date: String,
    /// Repeat rule: "d <1-400>" or "y"
    #[arg(long, default_value = "")]
    repeat: String,
}

/// Prints the next occurrence as a bare `YYYYMMDD` line.
pub fn cmd(args: NextDateArgs) -> Result<()> {
    let today = match args.now {
        Some(now) => parse_date(&now).map_err(failed)?,
        None => date::today(),
    };

    let next = next_date(today, &args.date, &args.repeat).map_err(failed)?;
    println!("{}", format_date(next));

    Ok(())
}

/// The underlying `TaskError` stays downcastable for the exit status.
fn failed(err: TaskError) -> anyhow::Error {
    let message = Message::NextDateFailed(err.to_string());
    anyhow::Error::new(err).context(message)
}
