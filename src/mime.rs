use std::{
    collections::BTreeMap,
    ffi::{OsStr, OsString},
};

use once_cell::sync::Lazy;

/// Only the playable kinds the gallery tags with a `type` attribute.
static DEFAULT: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("wav", "audio/wav"),
    ("webm", "video/webm"),
];

pub static MIME_TYPES: Lazy<MimeMap> = Lazy::new(MimeMap::default);

pub struct MimeMap {
    map: BTreeMap<OsString, String>
}

impl MimeMap {
    pub fn empty() -> Self {
        Self { map: BTreeMap::new() }
    }

    pub fn set<K, V>(&mut self, k: K, v: V)
    where
        K: Into<OsString>,
        V: Into<String>,
    {
        let k = k.into().to_ascii_lowercase();
        let v = v.into();
        _ = self.map.insert(k, v);
    }

    pub fn maybe_mime_type<'a, K>(&'a self, k: K) -> Option<&'a str>
    where K: AsRef<OsStr>
    {
        let k = k.as_ref().to_ascii_lowercase();
        self.map.get(&k).map(|s| s.as_str())
    }
}

impl Default for MimeMap {
    fn default() -> Self {
        let mut mm = MimeMap::empty();
        for (k, v) in DEFAULT.iter() {
            mm.set(*k, *v);
        }
        mm
    }
}
