use std::fs;

use webserv_cgi::contact;

fn contacts_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("contacts.txt")
}

#[test]
fn alice_is_recorded_and_thanked() {
    let dir = tempfile::tempdir().unwrap();
    let log = contacts_path(&dir);

    let out = contact::run(
        ["--name=Alice", "--email=a@example.com", "--message=Hello"],
        &log
    );

    assert!(out.is_html());
    assert!(out.body().contains("Merci, Alice"));
    assert!(out.body().contains("a@example.com"));
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "Nom: Alice\nEmail: a@example.com\nMessage: Hello\n---\n"
    );
}

#[test]
fn records_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let log = contacts_path(&dir);

    contact::run(["--name=A", "--email=a@x", "--message=one"], &log);
    contact::run(["--message=two", "--email=b@x", "--name=B", "--extra=1"], &log);

    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "Nom: A\nEmail: a@x\nMessage: one\n---\n\
         Nom: B\nEmail: b@x\nMessage: two\n---\n"
    );
}

#[test]
fn markup_is_stored_raw_and_shown_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let log = contacts_path(&dir);

    let out = contact::run(
        ["--name=Bob", "--email=b@example.com", "--message=<b>hi</b>"],
        &log
    );

    assert!(out.body().contains("&lt;b&gt;hi&lt;/b&gt;"));
    assert!(!out.body().contains("<b>hi</b>"));
    assert!(fs::read_to_string(&log).unwrap().contains("Message: <b>hi</b>\n"));
}

#[test]
fn incomplete_submissions_write_nothing() {
    let cases: &[&[&str]] = &[
        &[],
        &["--email=a@x", "--message=m"],
        &["--name=A", "--message=m"],
        &["--name=A", "--email=a@x"],
        &["--name=", "--email=a@x", "--message=m"],
        &["--name=A", "--email", "--message=m"],
        &["name=A", "email=a@x", "message=m"],
    ];

    let dir = tempfile::tempdir().unwrap();
    let log = contacts_path(&dir);
    for args in cases {
        let out = contact::run(args.iter(), &log);
        assert!(out.is_html(), "{:?}", args);
        assert!(out.body().contains("<h1>Erreur</h1>"), "{:?}", args);
        assert!(out.body().contains("Veuillez remplir tous les champs"), "{:?}", args);
        assert!(!log.exists(), "{:?} wrote to the log", args);
    }
}

#[test]
fn first_equals_splits() {
    let dir = tempfile::tempdir().unwrap();
    let log = contacts_path(&dir);

    contact::run(["--name=A", "--email=a@x", "--message=x=1&y=2"], &log);
    assert!(fs::read_to_string(&log).unwrap().contains("Message: x=1&y=2\n"));
}
