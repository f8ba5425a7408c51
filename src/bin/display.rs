//! Dumps the working directory, arguments and environment.

use webserv_cgi::{dump, startup, CgiErr, Output};

fn wrapped_main() -> Result<(), CgiErr> {
    let cfg = startup()?;

    let snap = dump::EnvSnapshot::capture();
    let out = Output::Html(dump::render_dump(&snap));
    out.write_to(std::io::stdout().lock(), cfg.emit_headers)
        .map_err(|e| CgiErr::from(e).wrap("error writing response"))
}

fn main() {
    if let Err(e) = wrapped_main() {
        println!("{}", &e);
        std::process::exit(1);
    }
}
