/*!
The media gallery: one card per visible file in the uploads directory.

Cards come out in whatever order the directory listing yields them. That
order is unspecified and deliberately left unsorted.
*/

use std::{
    ffi::OsStr,
    fmt::Write,
    os::unix::ffi::OsStrExt,
    path::Path,
};

use crate::{html::escape, mime::MIME_TYPES, Output};

static IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif"];
static VIDEO_EXTS: &[&str] = &["mp4", "webm"];
static AUDIO_EXTS: &[&str] = &["mp3", "wav"];

static GALLERY_HEAD: &str = "
<!DOCTYPE html>
<html lang=\"fr\">
<head>
    <meta charset=\"UTF-8\">
    <title>Galerie Multimédia</title>
    <style>
        .media-container {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
        }
        .media-item {
            margin: 10px;
            text-align: center;
        }
        img, video, audio {
            max-width: 200px;
            max-height: 200px;
        }
    </style>
</head>
<body>
<h1 style='text-align: center;'>Galerie Multimédia</h1>
<div class='media-container'>
";

static GALLERY_FOOT: &str = "
</div>
</body>
</html>
";

static NO_VIDEO: &str = "Votre navigateur ne prend pas en charge la lecture de vidéos.";
static NO_AUDIO: &str = "Votre navigateur ne prend pas en charge l'audio.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MediaKind {
    Image,
    /// Playable video; `mime` is a best guess from the file name.
    Video { mime: Option<&'static str> },
    Audio { mime: Option<&'static str> },
    Other,
}

impl MediaKind {
    pub fn classify(file_name: &str) -> MediaKind {
        let ext = match extension(file_name) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => { return MediaKind::Other; },
        };
        let ext = ext.as_str();

        if IMAGE_EXTS.contains(&ext) {
            MediaKind::Image
        } else if VIDEO_EXTS.contains(&ext) {
            MediaKind::Video { mime: MIME_TYPES.maybe_mime_type(ext) }
        } else if AUDIO_EXTS.contains(&ext) {
            MediaKind::Audio { mime: MIME_TYPES.maybe_mime_type(ext) }
        } else {
            MediaKind::Other
        }
    }
}

/**
The text after the last `.` of a file name, unless that `.` is the first
character (`.bashrc` has no extension, `archive.` has an empty one).
*/
fn extension(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(0) | None => None,
        Some(n) => Some(&file_name[n + 1..]),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadEntry {
    /// For display; lossy if the on-disk name isn't UTF-8.
    pub name: String,
    /// The on-disk name, percent-encoded byte for byte.
    pub encoded_name: String,
    pub kind: MediaKind,
}

impl UploadEntry {
    pub fn new<S: AsRef<OsStr>>(file_name: S) -> UploadEntry {
        let file_name = file_name.as_ref();
        let name = file_name.to_string_lossy().into_owned();
        let encoded_name = urlencoding::encode_binary(file_name.as_bytes()).into_owned();
        let kind = MediaKind::classify(&name);
        UploadEntry { name, encoded_name, kind }
    }
}

/// Percent-encode each `/`-separated segment of the directory prefix.
fn encode_dir(dir: &str) -> String {
    dir.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Read `dir` once, skipping dot-prefixed names. Order is as listed.
pub fn snapshot<P: AsRef<Path>>(dir: P) -> std::io::Result<Vec<UploadEntry>> {
    let dir = dir.as_ref();
    log::trace!("snapshot( {} ) called.", dir.display());

    let mut entries = Vec::new();
    for res in std::fs::read_dir(dir)? {
        let name = res?.file_name();
        if name.as_bytes().first() == Some(&b'.') {
            continue;
        }
        entries.push(UploadEntry::new(&name));
    }

    log::debug!("{} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

fn write_card<W: Write>(mut w: W, dir: &str, entry: &UploadEntry) -> std::fmt::Result {
    let name = escape(&entry.name);
    let src = format!("{}{}", dir, &entry.encoded_name);
    let src = escape(&src);

    writeln!(w, "<div class='media-item'>")?;
    match entry.kind {
        MediaKind::Image => {
            writeln!(w, "<img src='{}' alt='{}'>", src, name)?;
        },
        MediaKind::Video { mime } => {
            writeln!(
                w,
                "<video controls>\n    <source src='{}' type='{}'>\n    {}\n</video>",
                src, mime.unwrap_or(""), NO_VIDEO
            )?;
        },
        MediaKind::Audio { mime } => {
            writeln!(
                w,
                "<audio controls>\n    <source src='{}' type='{}'>\n    {}\n</audio>",
                src, mime.unwrap_or(""), NO_AUDIO
            )?;
        },
        MediaKind::Other => {},
    }
    writeln!(w, "<p>{}</p>", name)?;
    writeln!(w, "</div>")
}

/**
Render the full gallery page.

`dir` is the directory as the browser should see it; its segments are
percent-encoded and it prefixes each file name in `src` attributes.
*/
pub fn render_gallery(dir: &str, entries: &[UploadEntry]) -> String {
    log::trace!("render_gallery( {:?}, [ {} entries ] ) called.", dir, entries.len());
    let dir = encode_dir(dir);

    let mut page = String::with_capacity(
        GALLERY_HEAD.len() + GALLERY_FOOT.len() + 160 * entries.len()
    );
    page.push_str(GALLERY_HEAD);
    for entry in entries.iter() {
        // Writing to a String can't fail.
        _ = write_card(&mut page, &dir, entry);
    }
    page.push_str(GALLERY_FOOT);
    page
}

pub fn run(dir: &str) -> Output {
    log::trace!("gallery::run( {:?} ) called.", dir);

    match snapshot(dir) {
        Ok(entries) => Output::Html(render_gallery(dir, &entries)),
        Err(e) => {
            log::error!("Unable to read uploads directory {}: {}", dir, &e);
            Output::Plain(format!("Impossible d'ouvrir le dossier '{}': {}\n", dir, &e))
        },
    }
}
