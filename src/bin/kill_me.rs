//! Ends its own process with SIGTERM.

use webserv_cgi::{kill, startup};

fn main() {
    // A broken config shouldn't keep this from dying.
    if let Err(e) = startup() {
        eprintln!("{}", &e);
    }

    kill::terminate(std::process::id());
}
