use crate::{
    build_info,
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        PossibleValuesParser, ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("userlist")
        .about("Fetch and render the users list")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(build_info::LONG_VERSION)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .help("API base URL; users are read from <base-url>/api/users")
                .default_value(DEFAULT_BASE_URL)
                .env("USERLIST_BASE_URL"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value(DEFAULT_TIMEOUT_SECS)
                .env("USERLIST_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format")
                .default_value("text")
                .env("USERLIST_FORMAT")
                .value_parser(PossibleValuesParser::new(["html", "text"])),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERLIST_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
