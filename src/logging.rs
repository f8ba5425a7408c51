/*!
Logger setup.

Stdout is the response body, so everything goes to stderr, where a CGI
host typically forwards it to its error log.
*/
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

pub fn init(level: LevelFilter) {
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("webserv_cgi")
        .add_filter_allow_str("list_uploads")
        .add_filter_allow_str("contact_form")
        .add_filter_allow_str("display")
        .add_filter_allow_str("kill_me")
        .build();

    // Fails only if a logger is already installed, which is fine.
    _ = TermLogger::init(
        level,
        log_cfg,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
