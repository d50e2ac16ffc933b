use std::{io::Write, path::PathBuf};

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use loose_odb::repo::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty object store")
        .arg(
            Arg::with_name("directory")
                .help("The directory to create the store in (default: work dir)"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let path = match args.value_of("directory") {
        Some(dir) => PathBuf::from(dir),
        None => app.work_dir()?,
    };

    let repo = OnDisk::init(&path)?;

    writeln!(
        app,
        "Initialized empty store in {}",
        repo.git_dir().display()
    )?;

    Ok(())
}
