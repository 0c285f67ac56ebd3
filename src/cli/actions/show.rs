use crate::{
    component::UserList,
    config::AppConfig,
    render,
    state::FetchState,
    users::UsersClient,
};
use anyhow::{anyhow, bail, Result};
use std::{
    fmt,
    io::{stdout, Write},
    str::FromStr,
};
use tracing::info;

/// Output format for the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Html,
    #[default]
    Text,
}

impl Format {
    #[must_use]
    pub fn render(self, state: &FetchState) -> String {
        match self {
            Self::Html => render::html(state),
            Self::Text => render::text(state),
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            other => Err(anyhow!("unsupported format: {other}")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub config: AppConfig,
    pub format: Format,
}

/// Mount the list, wait for the fetch to settle and print the rendered view.
/// # Errors
/// Returns an error if the client cannot be built, stdout cannot be written, or
/// the fetch failed (the error view is still printed first).
pub async fn execute(args: Args) -> Result<()> {
    let client = UsersClient::new(&args.config)?;

    info!(url = client.url(), format = %args.format, "fetching users");

    let mut mounted = UserList::new(client).mount();
    let state = mounted.settled().await;

    let mut out = stdout().lock();
    out.write_all(args.format.render(&state).as_bytes())?;
    out.flush()?;

    if let Some(message) = state.error() {
        bail!("failed to load users: {message}");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{execute, Args, Format};
    use crate::config::AppConfig;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("HTML".parse::<Format>().unwrap(), Format::Html);
        assert_eq!(" text ".parse::<Format>().unwrap(), Format::Text);
        assert!("json".parse::<Format>().is_err());
        assert_eq!(Format::default(), Format::Text);
        assert_eq!(Format::Html.to_string(), "html");
    }

    #[tokio::test]
    async fn execute_succeeds_on_users_payload() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Ada", "email": "ada@example.com", "role": "admin"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let args = Args {
            config: AppConfig::new(&server.uri()),
            format: Format::Html,
        };

        assert!(execute(args).await.is_ok());
    }

    #[tokio::test]
    async fn execute_fails_when_the_fetch_fails() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let args = Args {
            config: AppConfig::new(&server.uri()),
            format: Format::Text,
        };

        let err = execute(args).await.unwrap_err();
        assert!(err.to_string().contains("502 Bad Gateway"));
    }

    #[tokio::test]
    async fn execute_rejects_invalid_base_url() {
        let args = Args {
            config: AppConfig::new("ftp://users.example"),
            format: Format::Text,
        };

        assert!(execute(args).await.is_err());
    }
}
