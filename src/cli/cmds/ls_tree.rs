use std::io::{self, Write};

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use loose_odb::object::{Id, Kind, TreeEntry};
use loose_odb::repo::{self, Repo};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("ls-tree")
        .about("List the contents of a tree object")
        .arg(
            Arg::with_name("name-only")
                .long("name-only")
                .help("List only file names"),
        )
        .arg(
            Arg::with_name("tree")
                .required(true)
                .help("ID of the tree to list"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let hex = args.value_of("tree").unwrap_or_default();
    let id = Id::from_hex(hex).map_err(repo::Error::from)?;

    let entries = app.repo()?.read_tree(&id)?;
    write_entries(app, &entries, args.is_present("name-only"))?;

    Ok(())
}

/// Write one line per entry: `<mode> <type> <id>\t<name>`, or just the
/// name when `name_only` is set. Names are written as raw bytes.
pub(crate) fn write_entries(
    out: &mut dyn Write,
    entries: &[TreeEntry],
    name_only: bool,
) -> io::Result<()> {
    for entry in entries {
        if !name_only {
            let kind = entry
                .file_mode()
                .map(|mode| mode.object_kind())
                .unwrap_or(Kind::Blob);
            write!(out, "{:06o} {} {}\t", entry.mode(), kind, entry.id())?;
        }
        out.write_all(entry.name())?;
        out.write_all(b"\n")?;
    }

    Ok(())
}
