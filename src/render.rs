//! Views for the users list. Each state renders exactly one of the loading, error,
//! empty or card views. User-supplied text is escaped before it reaches markup.

use crate::{state::FetchState, users::User};

pub const HEADING: &str = "Users";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No users found.";

/// Renders the state as HTML markup.
#[must_use]
pub fn html(state: &FetchState) -> String {
    let mut out = String::from("<div class=\"user-list\">\n");
    out.push_str("  <h2>");
    out.push_str(HEADING);
    out.push_str("</h2>\n");

    match state {
        FetchState::Loading => {
            out.push_str("  <p role=\"status\" aria-live=\"polite\">");
            out.push_str(LOADING_MESSAGE);
            out.push_str("</p>\n");
        }
        FetchState::Failed(message) => {
            out.push_str("  <p class=\"error\" role=\"alert\">Error: ");
            out.push_str(&escape(message));
            out.push_str("</p>\n");
        }
        FetchState::Success(users) if users.is_empty() => {
            out.push_str("  <p>");
            out.push_str(EMPTY_MESSAGE);
            out.push_str("</p>\n");
        }
        FetchState::Success(users) => {
            for user in users {
                push_card(&mut out, user);
            }
        }
    }

    out.push_str("</div>\n");
    out
}

fn push_card(out: &mut String, user: &User) {
    out.push_str(&format!(
        "  <div class=\"user-card\" data-key=\"{}\">\n",
        user.id
    ));
    out.push_str(&format!("    <h3>{}</h3>\n", escape(&user.name)));
    out.push_str(&format!("    <p>{}</p>\n", escape(&user.email)));
    out.push_str(&format!("    <span>{}</span>\n", escape(&user.role)));
    out.push_str("  </div>\n");
}

/// Renders the state for a terminal.
#[must_use]
pub fn text(state: &FetchState) -> String {
    let mut out = format!("{HEADING}\n");

    match state {
        FetchState::Loading => out.push_str(&format!("{LOADING_MESSAGE}\n")),
        FetchState::Failed(message) => {
            out.push_str(&format!("Error: {}\n", terminal_safe(message)));
        }
        FetchState::Success(users) if users.is_empty() => {
            out.push_str(&format!("{EMPTY_MESSAGE}\n"));
        }
        FetchState::Success(users) => {
            for user in users {
                out.push_str(&format!(
                    "#{} {} <{}> [{}]\n",
                    user.id,
                    terminal_safe(&user.name),
                    terminal_safe(&user.email),
                    terminal_safe(&user.role)
                ));
            }
        }
    }

    out
}

/// Replaces control characters so payload text cannot drive the terminal, for
/// example with ANSI escape sequences or carriage returns.
fn terminal_safe(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_control() { '\u{fffd}' } else { ch })
        .collect()
}

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
