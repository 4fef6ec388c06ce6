//! Configuration initialization command.
//!
//! Runs the interactive setup wizard, or writes the defaults straight away
//! with `--defaults`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Save the default configuration without prompting
    #[arg(long)]
    defaults: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults {
        Config {
            storage: Some(Default::default()),
            list: Some(Default::default()),
        }
    } else {
        Config::init()?
    };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
