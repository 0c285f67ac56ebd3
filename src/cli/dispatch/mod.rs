use crate::cli::actions::{
    show::{Args, Format},
    Action,
};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::time::Duration;

/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let base_url = matches
        .get_one::<String>("base-url")
        .context("missing required argument: --base-url")?;
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .context("missing required argument: --timeout")?;
    let format = matches
        .get_one::<String>("format")
        .map(|value| value.parse::<Format>())
        .transpose()?
        .unwrap_or_default();

    let config = AppConfig::new(base_url).with_timeout(Duration::from_secs(timeout));

    // Fail before any network work when the URL is unusable.
    config
        .endpoint_url(crate::users::USERS_PATH)
        .context("invalid USERLIST_BASE_URL")?;

    Ok(Action::Show(Args { config, format }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::handler;
    use crate::cli::{actions::Action, actions::show::Format, commands};
    use std::time::Duration;

    #[test]
    fn builds_show_action_from_flags() {
        let matches = commands::new().get_matches_from(vec![
            "userlist",
            "--base-url",
            "http://127.0.0.1:8000/",
            "--timeout",
            "5",
            "--format",
            "html",
        ]);

        let Action::Show(args) = handler(&matches).unwrap();
        assert_eq!(args.config.base_url, "http://127.0.0.1:8000/");
        assert_eq!(args.config.timeout, Duration::from_secs(5));
        assert_eq!(args.format, Format::Html);
    }

    #[test]
    fn rejects_unusable_base_url() {
        let matches =
            commands::new().get_matches_from(vec!["userlist", "--base-url", "localhost:8000"]);

        let err = handler(&matches).unwrap_err();
        assert!(err.to_string().contains("USERLIST_BASE_URL"));
    }
}
