use std::{
    error::Error,
    io::{self, Write},
};

use tracing_subscriber::EnvFilter;

mod app;
pub(crate) use app::App;

mod cmds;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[allow(unused_must_use)]
fn main() {
    // Put as little as possible into this function so the rest stays
    // reachable from tests.

    init_logging();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let r = app.run();

    app.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            app::exit_code(err.as_ref())
        }
    });
}

// Logs go to stderr so stdout stays byte-exact for scripts.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
