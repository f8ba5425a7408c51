/*!
The contact form handler.

The web server passes form fields as `--key=value` arguments. A valid
submission is appended to a flat text file and acknowledged with a
confirmation page.

The contacts file is opened in append mode with no locking. Two requests
handled at the same time by separate processes can interleave their lines;
that race is accepted.
*/

use std::{
    collections::BTreeMap,
    fs::OpenOptions,
    io::Write,
    path::Path,
};

use crate::{html::escape, CgiErr, Output};

static PREFIX: &str = "--";
static REQUIRED: [&str; 3] = ["name", "email", "message"];

static ERROR_HEAD: &str = "<html><body>\n<h1>Erreur</h1>\n";
static ERROR_FOOT: &str = "</body></html>\n";

/// How one invocation argument was understood.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    Param { key: &'a str, value: &'a str },
    /// Has the `--` prefix but no `=`.
    Malformed(&'a str),
    /// Lacks the `--` prefix.
    Ignored(&'a str),
}

pub fn classify_token(raw: &str) -> Token<'_> {
    match raw.strip_prefix(PREFIX) {
        Some(rest) => match rest.split_once('=') {
            Some((key, value)) => Token::Param { key, value },
            None => Token::Malformed(raw),
        },
        None => Token::Ignored(raw),
    }
}

/// Collect `--key=value` arguments; a repeated key keeps its last value.
pub fn parse_params<I, S>(args: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = BTreeMap::new();
    for arg in args {
        match classify_token(arg.as_ref()) {
            Token::Param { key, value } => {
                params.insert(key.to_owned(), value.to_owned());
            },
            Token::Malformed(raw) => {
                log::debug!("dropping parameter with no value: {:?}", raw);
            },
            Token::Ignored(raw) => {
                log::debug!("ignoring argument {:?}", raw);
            },
        }
    }
    params
}

#[derive(Debug, Eq, PartialEq)]
pub struct MissingFields(pub Vec<&'static str>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing or empty fields: {}", self.0.join(", "))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRecord {
    /// Presence is the only check; the email address is not validated.
    pub fn from_params(params: &BTreeMap<String, String>) -> Result<ContactRecord, MissingFields> {
        let missing: Vec<&'static str> = REQUIRED.iter()
            .filter(|k| params.get(**k).map(|v| v.is_empty()).unwrap_or(true))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        let field = |k: &str| params.get(k).cloned().unwrap_or_default();
        Ok(ContactRecord {
            name: field("name"),
            email: field("email"),
            message: field("message"),
        })
    }

    /// The stored form of the record. Values are written raw.
    pub fn to_log_block(&self) -> String {
        format!(
            "Nom: {}\nEmail: {}\nMessage: {}\n---\n",
            &self.name, &self.email, &self.message
        )
    }
}

/// Append one record. The parent directory must already exist.
pub fn append_record<P: AsRef<Path>>(p: P, rec: &ContactRecord) -> Result<(), CgiErr> {
    let p = p.as_ref();
    log::trace!("append_record( {}, [ ContactRecord ] ) called.", p.display());

    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(p)
        .map_err(|e| CgiErr::from(e).wrap(format!("unable to open {}", p.display())))?;

    f.write_all(rec.to_log_block().as_bytes())
        .and_then(|_| f.flush())
        .map_err(|e| CgiErr::from(e).wrap(format!("unable to write {}", p.display())))
}

pub fn render_missing_fields() -> String {
    format!(
        "{}<p>Veuillez remplir tous les champs du formulaire.</p>\n{}",
        ERROR_HEAD, ERROR_FOOT
    )
}

pub fn render_save_error(e: &CgiErr) -> String {
    format!(
        "{}<p>Une erreur est survenue lors de l'enregistrement des données: {}</p>\n{}",
        ERROR_HEAD, escape(&e.to_string()), ERROR_FOOT
    )
}

pub fn render_confirmation(rec: &ContactRecord) -> String {
    format!("
<!DOCTYPE html>
<html lang=\"fr\">
<head>
    <meta charset=\"UTF-8\">
    <title>Merci de nous avoir contactés</title>
</head>
<body>
    <h1>Merci, {}</h1>
    <p>Votre message a été reçu avec succès. Nous vous contacterons bientôt à l'adresse {}.</p>
    <p>Voici le recapitulatif de votre message :'{}'.</p>
</body>
</html>
",
        escape(&rec.name), escape(&rec.email), escape(&rec.message)
    )
}

/**
Handle one submission. `args` are the invocation arguments after the
program name; `log_path` is the contacts file.
*/
pub fn run<I, S, P>(args: I, log_path: P) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let params = parse_params(args);
    let rec = match ContactRecord::from_params(&params) {
        Ok(rec) => rec,
        Err(e) => {
            log::info!("rejected submission: {}", &e);
            return Output::Html(render_missing_fields());
        },
    };

    if let Err(e) = append_record(log_path, &rec) {
        log::error!("{}", &e);
        return Output::Html(render_save_error(&e));
    }

    Output::Html(render_confirmation(&rec))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn tokens_are_classified() {
        assert_eq!(
            classify_token("--name=Alice"),
            Token::Param { key: "name", value: "Alice" }
        );
        assert_eq!(
            classify_token("--message=a=b=c"),
            Token::Param { key: "message", value: "a=b=c" }
        );
        assert_eq!(
            classify_token("--email="),
            Token::Param { key: "email", value: "" }
        );
        assert_eq!(classify_token("--name"), Token::Malformed("--name"));
        assert_eq!(classify_token("name=Alice"), Token::Ignored("name=Alice"));
        assert_eq!(classify_token("-name=Alice"), Token::Ignored("-name=Alice"));
    }

    #[test]
    fn last_value_wins() {
        let p = parse_params(["--name=first", "stray", "--name=second", "--flag"]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("name").map(String::as_str), Some("second"));
    }

    #[test]
    fn every_required_field_is_checked() {
        let full = [("name", "A"), ("email", "b"), ("message", "c")];
        for skip in 0..3 {
            let partial: Vec<(&str, &str)> = full.iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, kv)| *kv)
                .collect();
            let err = ContactRecord::from_params(&params(&partial)).unwrap_err();
            assert_eq!(err.0, vec![full[skip].0]);

            let mut blanked = full;
            blanked[skip].1 = "";
            assert!(ContactRecord::from_params(&params(&blanked)).is_err());
        }
    }

    #[test]
    fn email_format_is_not_checked() {
        let rec = ContactRecord::from_params(
            &params(&[("name", "A"), ("email", "not an address"), ("message", "m")])
        ).unwrap();
        assert_eq!(rec.email, "not an address");
    }

    #[test]
    fn log_block_is_raw() {
        let rec = ContactRecord {
            name: "Alice".into(),
            email: "a@example.com".into(),
            message: "<b>hi</b>".into(),
        };
        assert_eq!(
            rec.to_log_block(),
            "Nom: Alice\nEmail: a@example.com\nMessage: <b>hi</b>\n---\n"
        );
    }

    #[test]
    fn confirmation_escapes_everything() {
        let rec = ContactRecord {
            name: "<i>Al</i>".into(),
            email: "a\"@x".into(),
            message: "<b>hi</b>".into(),
        };
        let page = render_confirmation(&rec);
        assert!(page.contains("Merci, &lt;i&gt;Al&lt;/i&gt;"));
        assert!(page.contains("a&quot;@x"));
        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!page.contains("<b>hi</b>"));
    }

    #[test]
    fn missing_parent_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("contacts.txt");
        let out = run(["--name=A", "--email=b", "--message=c"], &target);
        assert!(out.is_html());
        assert!(out.body().contains("<h1>Erreur</h1>"));
        assert!(out.body().contains("Une erreur est survenue"));
        assert!(!target.exists());
    }
}
