use crate::{App, Result};

mod cat_file;
mod hash_object;
mod init;
mod ls_tree;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(cat_file::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
        .subcommand(ls_tree::subcommand())
}

pub(crate) fn dispatch(app: &mut App) -> Result<()> {
    let matches = app.arg_matches.clone();
    // ^^ Need an independent copy of matches so we can still pass
    // the App struct through to subcommand imps.

    match matches.subcommand() {
        ("cat-file", Some(m)) => cat_file::run(app, &m),
        ("hash-object", Some(m)) => hash_object::run(app, &m),
        ("init", Some(m)) => init::run(app, &m),
        ("ls-tree", Some(m)) => ls_tree::run(app, &m),
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}
