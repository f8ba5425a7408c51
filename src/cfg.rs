/*!
Deployment configuration.

Every script works with no configuration file at all; the defaults are the
paths the scripts have always used relative to the server-supplied working
directory. A `cgi.toml` only exists to relocate them for a particular
deployment. Nothing here is settable per request.
*/

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use simplelog::LevelFilter;

pub static DEFAULT_CONFIG_FILE: &str = "cgi.toml";
pub static CONFIG_VAR: &str = "WEBSERV_CGI_CONFIG";
pub static LOG_VAR: &str = "WEBSERV_CGI_LOG";

static DEFAULT_UPLOADS_DIR: &str = "../uploads/";
static DEFAULT_CONTACTS_FILE: &str = "forms/contacts.txt";

#[derive(Debug, Deserialize)]
struct CfgFile {
    uploads_dir: Option<String>,
    contacts_file: Option<PathBuf>,
    emit_headers: Option<bool>,
    log_level: Option<String>,
}

#[derive(Debug)]
pub struct Cfg {
    /// Kept as a string: it is also the `src` prefix of every gallery card
    /// (percent-encoded there), so a trailing `/` matters.
    pub uploads_dir: String,
    pub contacts_file: PathBuf,
    pub emit_headers: bool,
    pub log_level: LevelFilter,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            uploads_dir: DEFAULT_UPLOADS_DIR.to_owned(),
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            emit_headers: false,
            log_level: LevelFilter::Warn,
        }
    }
}

pub fn parse_level(s: &str) -> Result<LevelFilter, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        x => Err(format!("unrecognized log level {:?}", x)),
    }
}

impl Cfg {
    pub fn parse(text: &str) -> Result<Cfg, String> {
        let cf: CfgFile = toml::from_str(text).map_err(|e| format!(
            "Error parsing config: {}", &e
        ))?;

        let mut cfg = Cfg::default();
        if let Some(mut dir) = cf.uploads_dir {
            if dir.is_empty() {
                return Err("uploads_dir must not be empty.".to_owned());
            }
            if !dir.ends_with('/') {
                dir.push('/');
            }
            cfg.uploads_dir = dir;
        }
        if let Some(p) = cf.contacts_file {
            cfg.contacts_file = p;
        }
        if let Some(b) = cf.emit_headers {
            cfg.emit_headers = b;
        }
        if let Some(s) = cf.log_level {
            cfg.log_level = parse_level(&s)?;
        }

        Ok(cfg)
    }

    pub fn from_file<P: AsRef<Path>>(p: P) -> Result<Cfg, String> {
        let p = p.as_ref();
        let text = std::fs::read_to_string(p).map_err(|e| format!(
            "Error reading config file {}: {}", p.display(), &e
        ))?;
        Cfg::parse(&text).map_err(|e| format!("{} ({})", &e, p.display()))
    }

    /// Like `from_file`, but a missing file means defaults.
    pub fn load<P: AsRef<Path>>(p: P) -> Result<Cfg, String> {
        let p = p.as_ref();
        match std::fs::metadata(p) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Cfg::default()),
            _ => Cfg::from_file(p),
        }
    }
}
