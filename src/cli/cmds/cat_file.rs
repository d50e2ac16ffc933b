use std::io::Write;

use crate::{App, Result};

use clap::{Arg, ArgGroup, ArgMatches, SubCommand};
use loose_odb::object::{parse_tree, Id, Kind};
use loose_odb::repo::{self, Repo};

use super::ls_tree;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content or type and size information for stored objects")
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Pretty-print the object's content"),
        )
        .arg(Arg::with_name("t").short("t").help("Show the object type"))
        .arg(Arg::with_name("s").short("s").help("Show the object size"))
        .arg(
            Arg::with_name("e")
                .short("e")
                .help("Exit with zero status if the object exists"),
        )
        .group(
            ArgGroup::with_name("mode")
                .args(&["p", "t", "s", "e"])
                .required(true),
        )
        .arg(
            Arg::with_name("object")
                .required(true)
                .help("ID of the object to show"),
        )
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let hex = args.value_of("object").unwrap_or_default();
    let id = Id::from_hex(hex).map_err(repo::Error::from)?;
    let store = app.repo()?;

    if args.is_present("e") {
        return if store.has_loose_object(&id) {
            Ok(())
        } else {
            Err(Box::new(repo::Error::NotFound(id)))
        };
    }

    let object = store.get_loose_object(&id)?;

    if args.is_present("t") {
        writeln!(app, "{}", object.type_tag())?;
    } else if args.is_present("s") {
        writeln!(app, "{}", object.len())?;
    } else if object.kind() == Some(Kind::Tree) {
        let entries = parse_tree(object.payload()).map_err(repo::Error::from)?;
        ls_tree::write_entries(app, &entries, false)?;
    } else {
        app.write_all(object.payload())?;
    }

    Ok(())
}
