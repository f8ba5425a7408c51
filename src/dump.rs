/*!
The diagnostic dumper: echoes back the working directory, the argument list
and the complete environment as an HTML page.

Nothing is filtered. Whatever secrets the server leaves in the CGI
environment end up in the page; deploy accordingly.
*/

use std::{
    fmt::Write,
    path::PathBuf,
};

use crate::html::escape;

#[derive(Clone, Debug, Default)]
pub struct EnvSnapshot {
    pub cwd: PathBuf,
    /// Includes the program name at index 0.
    pub args: Vec<String>,
    /// In the order the process environment yielded them.
    pub vars: Vec<(String, String)>,
}

impl EnvSnapshot {
    /// Snapshot the running process. Non-UTF-8 values are converted lossily.
    pub fn capture() -> EnvSnapshot {
        let cwd = match std::env::current_dir() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("unable to read working directory: {}", &e);
                PathBuf::new()
            },
        };
        let args = std::env::args_os()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        let vars = std::env::vars_os()
            .map(|(k, v)| (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned()
            ))
            .collect();

        EnvSnapshot { cwd, args, vars }
    }
}

pub fn render_dump(snap: &EnvSnapshot) -> String {
    log::trace!(
        "render_dump( [ EnvSnapshot {} args, {} vars ] ) called.",
        snap.args.len(), snap.vars.len()
    );

    let mut page = String::new();
    // Writing to a String can't fail.
    _ = write_dump(&mut page, snap);
    page
}

fn write_dump<W: Write>(mut w: W, snap: &EnvSnapshot) -> std::fmt::Result {
    writeln!(w, "<html>")?;
    writeln!(w, "<head><title>Information CGI</title></head>")?;
    writeln!(w, "<body>")?;
    writeln!(w, "<h1>Information sur le script CGI</h1>")?;
    writeln!(
        w,
        "<p>Le repertoire de travail actuel est : <strong>{}</strong></p>",
        escape(&snap.cwd.to_string_lossy())
    )?;

    writeln!(w, "<h2>Arguments passes au script :</h2>")?;
    if snap.args.len() > 1 {
        writeln!(w, "<ul>")?;
        for (i, arg) in snap.args.iter().enumerate() {
            writeln!(w, "<li>Argument {}: {}</li>", i, escape(arg))?;
        }
        writeln!(w, "</ul>")?;
    } else {
        writeln!(w, "<p>Aucun argument recu.</p>")?;
    }

    writeln!(w, "<h2>Variables d'environnement :</h2>")?;
    writeln!(w, "<ul>")?;
    for (k, v) in snap.vars.iter() {
        writeln!(w, "<li>{} = {}</li>", escape(k), escape(v))?;
    }
    writeln!(w, "</ul>")?;

    writeln!(w, "</body>")?;
    writeln!(w, "</html>")
}
