use std::env;
use std::error::Error;
use std::io::{Read, Write};
use std::path::PathBuf;

#[cfg(test)]
use std::ffi::OsString;

use crate::{cmds, Result};

use clap::{crate_version, AppSettings, Arg, ArgMatches};
use loose_odb::repo::{self, OnDisk};

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    let app = clap::App::new("loose-odb")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("work-dir")
                .long("work-dir")
                .value_name("dir")
                .takes_value(true)
                .help("Use the store in <dir>/.git instead of the current directory"),
        );

    cmds::add_subcommands(app)
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        cmds::dispatch(self)
    }

    /// Directory holding the `.git` store: `--work-dir` if given, else the
    /// current directory.
    pub fn work_dir(&self) -> Result<PathBuf> {
        match self.arg_matches.value_of("work-dir") {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Ok(env::current_dir()?),
        }
    }

    /// Open the existing store for this invocation.
    pub fn repo(&self) -> Result<OnDisk> {
        Ok(OnDisk::new(&self.work_dir()?)?)
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<I, T>(stdin: Vec<u8>, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("loose-odb"));

        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();

        App {
            arg_matches: clap_app().get_matches_from_safe(args)?,
            stdin: &mut stdin,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let stdin: Vec<u8> = Vec::new();
        App::run_with_stdin_and_args(stdin, args)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

/// Exit code for a failed command. Store errors keep their own codes;
/// anything else (usage, unexpected I/O) exits with 1.
pub(crate) fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    err.downcast_ref::<repo::Error>()
        .map(repo::Error::exit_code)
        .unwrap_or(1)
}
