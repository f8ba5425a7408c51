//! Records a contact form submission passed as `--name=`, `--email=` and
//! `--message=` arguments.

use webserv_cgi::{contact, startup, CgiErr};

fn wrapped_main() -> Result<(), CgiErr> {
    let cfg = startup()?;

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let out = contact::run(&args, &cfg.contacts_file);
    out.write_to(std::io::stdout().lock(), cfg.emit_headers)
        .map_err(|e| CgiErr::from(e).wrap("error writing response"))
}

fn main() {
    if let Err(e) = wrapped_main() {
        println!("{}", &e);
        std::process::exit(1);
    }
}
