/*!
Small CGI programs run one-per-request by an external web server.

Each program snapshots whatever process state it needs in its `main`
(working directory, arguments, environment, pid) and hands that snapshot to
the functions here. Only `startup` and `dump::EnvSnapshot::capture` look at
the running process, and only the binaries call them.
*/

pub mod cfg;
pub mod contact;
pub mod dump;
pub mod gallery;
pub mod html;
pub mod kill;
pub mod logging;
pub mod mime;
pub mod resp;

use std::path::PathBuf;

pub use resp::Output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/**
Common start of every script's `main`: load the deployment config, then
start logging at the configured level (`WEBSERV_CGI_LOG` overrides it).
*/
pub fn startup() -> Result<cfg::Cfg, CgiErr> {
    let path = std::env::var_os(cfg::CONFIG_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(cfg::DEFAULT_CONFIG_FILE));
    let cfg = cfg::Cfg::load(&path)?;

    let level = match std::env::var(cfg::LOG_VAR) {
        Ok(s) => cfg::parse_level(&s).map_err(|e| format!(
            "{} in {}", &e, cfg::LOG_VAR
        ))?,
        Err(_) => cfg.log_level,
    };
    logging::init(level);

    log::debug!("webserv-cgi v{} configuration:\n{:#?}", VERSION, &cfg);
    Ok(cfg)
}

#[derive(Debug)]
pub struct CgiErr {
    messages: Vec<String>,
}

impl CgiErr {
    pub fn new<S: Into<String>>(message: S) -> CgiErr {
        CgiErr { messages: vec![message.into()] }
    }

    /// Add a line of context; the newest context is displayed first.
    pub fn wrap<S: Into<String>>(self, s: S) -> CgiErr {
        let mut messages = self.messages;
        messages.push(s.into());
        CgiErr { messages }
    }

    pub fn messages(&self) -> &[String] { &self.messages }
}

impl From<String> for CgiErr {
    fn from(s: String) -> CgiErr { CgiErr::new(s) }
}

impl From<&str> for CgiErr {
    fn from(s: &str) -> CgiErr { CgiErr::new(String::from(s)) }
}

impl From<std::io::Error> for CgiErr {
    fn from(e: std::io::Error) -> CgiErr { CgiErr::new(e.to_string()) }
}

impl std::fmt::Display for CgiErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for msg in self.messages.iter().rev() {
            if first {
                first = false;
            } else {
                write!(f, ": ")?;
            }
            write!(f, "{}", msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for CgiErr {}
