use crate::errors::ServerError;
use maud::{html, Markup, DOCTYPE};

/// Build a basic HTML error page
pub fn error_page(err: &ServerError) -> Markup {
    let status = err.status();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (err.to_string()) }
                p { a href="/" { "← Back to volunteers" } }
            }
        }
    }
}
