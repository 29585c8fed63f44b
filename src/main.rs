use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use discount_expirer::{
    built_info, configuration::Configuration, models::Timestamp, tasks::expire_discounts,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(about, long_about = None, disable_help_flag = true)]
struct Args {
    /// SQLite database containing the products table
    #[arg(allow_hyphen_values = true)]
    db_path: PathBuf,
}

/// Accepts exactly one argument after the program name and always reads it as
/// the database path, even when it looks like a flag or an option terminator.
fn parse_args(args: impl IntoIterator<Item = OsString>) -> Option<Args> {
    let mut args = args.into_iter();
    let program = args.next()?;
    let db_path = args.next()?;
    if args.next().is_some() {
        return None;
    }
    Args::try_parse_from([program, OsString::from("--"), db_path]).ok()
}

fn main() -> Result<()> {
    let Some(cli) = parse_args(std::env::args_os()) else {
        println!("need db path");
        std::process::exit(1);
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    debug!("{} {}", built_info::PKG_NAME, built_info::PKG_VERSION);

    let now = Timestamp::now();
    let config = Configuration::new(cli.db_path);
    expire_discounts::run(&config, &now)?;
    Ok(())
}
