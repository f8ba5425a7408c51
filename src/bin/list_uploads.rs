//! Gallery of everything in the uploads directory.

use webserv_cgi::{gallery, startup, CgiErr};

fn wrapped_main() -> Result<(), CgiErr> {
    let cfg = startup()?;

    let out = gallery::run(&cfg.uploads_dir);
    out.write_to(std::io::stdout().lock(), cfg.emit_headers)
        .map_err(|e| CgiErr::from(e).wrap("error writing response"))
}

fn main() {
    if let Err(e) = wrapped_main() {
        println!("{}", &e);
        std::process::exit(1);
    }
}
