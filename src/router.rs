use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, ResultResp};
use crate::templates;
use crate::volunteers::{ViewState, VolunteerListView, VolunteerSource};
use astra::Request;
use std::sync::Arc;

const MAIN_JS: &str = include_str!("../static/main.js");
const MAIN_CSS: &str = include_str!("../static/main.css");

/// Everything a request handler needs.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub source: Arc<dyn VolunteerSource>,
}

impl AppState {
    pub fn new(config: AppConfig, source: Arc<dyn VolunteerSource>) -> Self {
        Self { config, source }
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/volunteers") => volunteer_list_fragment(app),
        ("GET", "/static/main.js") => asset_response(MAIN_JS, mime::APPLICATION_JAVASCRIPT_UTF_8),
        ("GET", "/static/main.css") => asset_response(MAIN_CSS, mime::TEXT_CSS_UTF_8),

        (_, "/" | "/volunteers" | "/static/main.js" | "/static/main.css") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Mount a fresh list view, wait for its fetch to settle, render it and
/// unmount it. Only an explicit `render_wait` cuts the wait short.
fn volunteer_list_fragment(app: &AppState) -> ResultResp {
    let mut view = VolunteerListView::new();
    view.mount(Arc::clone(&app.source));
    view.wait_settled(app.config.render_wait);

    match view.state() {
        ViewState::Loading => log::warn!(
            "volunteer list still loading after {:?}, rendering placeholder",
            app.config.render_wait
        ),
        ViewState::Error(msg) => log::debug!("rendering volunteer list error: {msg}"),
        ViewState::Loaded(records) => log::debug!("rendering {} volunteer cards", records.len()),
    }

    let markup = view.render();
    view.unmount();

    html_response(markup)
}
