use std::fs;
use std::io::{Read, Write};

use crate::{App, Result};

use clap::{Arg, ArgMatches, Error, ErrorKind, SubCommand};
use loose_odb::object::{Kind, Object};
use loose_odb::repo::Repo;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally create an object from a file")
        .arg(
            Arg::with_name("t")
                .short("t")
                .value_name("type")
                .takes_value(true)
                .help("Specify the type (default 'blob')"),
        )
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(
            Arg::with_name("literally")
                .long("literally")
                .help("Allow any type tag, not just blob, commit, tag, or tree"),
        )
        .arg(Arg::with_name("file"))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let object = object_from_args(app, args)?;

    let id = if args.is_present("w") {
        let mut repo = app.repo()?;
        repo.put_loose_object(&object)?
    } else {
        object.id()
    };

    writeln!(app, "{}", id)?;

    Ok(())
}

fn object_from_args(app: &mut App, args: &ArgMatches) -> Result<Object> {
    let type_tag = type_from_args(args)?;
    let content = content_from_args(app, args)?;
    Ok(Object::new(type_tag, content))
}

fn type_from_args(args: &ArgMatches) -> Result<String> {
    let type_str = args.value_of("t").unwrap_or("blob");

    if args.is_present("literally") {
        if type_str.is_empty() || type_str.bytes().any(|b| b == b' ' || b == 0) {
            return Err(Box::new(Error {
                message: "-t must be a non-empty tag without spaces or NUL".to_string(),
                kind: ErrorKind::InvalidValue,
                info: None,
            }));
        }
        return Ok(type_str.to_string());
    }

    match type_str.parse::<Kind>() {
        Ok(kind) => Ok(kind.as_str().to_string()),
        Err(_) => Err(Box::new(Error {
            message: "-t must be one of blob, commit, tag, or tree".to_string(),
            kind: ErrorKind::InvalidValue,
            info: None,
        })),
    }
}

fn content_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    let stdin = args.is_present("stdin");
    let file = args.value_of("file");

    match (file, stdin) {
        (Some(path), false) => Ok(fs::read(path)?),
        (None, true) => {
            let mut content = Vec::new();
            app.stdin.read_to_end(&mut content)?;
            Ok(content)
        }
        _ => Err(Box::new(Error {
            message: "content source must be either --stdin or a file path".to_string(),
            kind: ErrorKind::MissingRequiredArgument,
            info: None,
        })),
    }
}
