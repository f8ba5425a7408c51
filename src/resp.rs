/*!
What a script hands back to the web server on stdout.
*/

use std::io::Write;

static HTML: &str = "text/html; charset=UTF-8";
static PLAIN: &str = "text/plain; charset=UTF-8";

/// A complete response body.
///
/// Successful runs and most failures are `Html`; the gallery's unreadable
/// directory diagnostic is the one `Plain` response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Html(String),
    Plain(String),
}

impl Output {
    pub fn content_type(&self) -> &'static str {
        match self {
            Output::Html(_) => HTML,
            Output::Plain(_) => PLAIN,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Output::Html(s) => s,
            Output::Plain(s) => s,
        }
    }

    pub fn is_html(&self) -> bool { matches!(self, Output::Html(_)) }

    /**
    Write the response. With `emit_headers` a `Content-Type` header block
    precedes the body; otherwise header emission is left to the server.
    */
    pub fn write_to<W: Write>(&self, mut w: W, emit_headers: bool) -> std::io::Result<()> {
        log::trace!(
            "Output::write_to( [ {} byte {} ], {} ) called.",
            self.body().len(), self.content_type(), emit_headers
        );

        if emit_headers {
            write!(w, "Content-Type: {}\r\n\r\n", self.content_type())?;
        }
        w.write_all(self.body().as_bytes())?;
        w.flush()
    }
}
