//! HTML pages: the contact form and the administration listing.
//!
//! Markup is written inline; every stored value goes through
//! [`tunelith_core::html::escape`].

use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use tunelith_core::{Message, MessageStore, Notifier, html::escape, timestamp};

use crate::AppState;

fn layout(title: &str, content: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{content}
</body>
</html>
"#,
    title = escape(title),
  )
}

/// `GET /`
pub async fn home() -> Html<String> {
  Html(layout(
    "Tunelith",
    r#"<h1>Contact us</h1>
<form method="post" action="/send_message">
<p><label>Name <input type="text" name="name" required></label></p>
<p><label>Email <input type="email" name="email" required></label></p>
<p><label>Message <textarea name="message" rows="6" required></textarea></label></p>
<p><button type="submit">Send</button></p>
</form>"#,
  ))
}

fn render_message(m: &Message) -> String {
  format!(
    r#"<article id="message-{id}">
<h2>#{id} {name} &lt;<a href="mailto:{email}">{email}</a>&gt;</h2>
<p><small>Submitted {submitted} &middot; stored {stored} UTC &middot; {sent}</small></p>
<pre style="white-space: pre-wrap;">{body}</pre>
</article>"#,
    id = m.id,
    name = escape(&m.name),
    email = escape(&m.email),
    submitted = timestamp::format_naive(&m.submitted_at),
    stored = timestamp::format_utc(&m.stored_at),
    sent = if m.notification_sent { "email sent" } else { "email not sent" },
    body = escape(&m.body),
  )
}

/// Render the administration listing for `messages`, already newest first.
pub fn render_messages(messages: &[Message]) -> String {
  let mut content = format!("<h1>Messages ({})</h1>\n", messages.len());
  if messages.is_empty() {
    content.push_str("<p>No messages yet.</p>\n");
  }
  for m in messages {
    content.push_str(&render_message(m));
    content.push('\n');
  }
  layout("Messages", &content)
}

/// `GET /messages`
pub async fn messages<S, N>(State(state): State<AppState<S, N>>) -> Response
where
  S: MessageStore + Clone + 'static,
  N: Notifier + Clone + 'static,
{
  match state.store.list_all().await {
    Ok(messages) => {
      tracing::debug!(count = messages.len(), "rendering messages");
      Html(render_messages(&messages)).into_response()
    }
    Err(e) => {
      tracing::error!(error = %e, "failed to load messages");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(layout("Messages", "<p>Error loading messages.</p>")),
      )
        .into_response()
    }
  }
}
