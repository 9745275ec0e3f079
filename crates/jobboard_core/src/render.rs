//! HTML markup for the results page, rendered from the templates under
//! `templates/`.
//!
//! Descriptions are emitted as received (they may carry the board's own
//! markup); every other field goes through the template's HTML escaping.

use askama::Template;

use crate::{AppViewModel, JobCardView, StatusStyle};

pub const LOADING_TEXT: &str = "Loading...";
pub const VIEW_POSTING_TEXT: &str = "View posting";

#[derive(Debug, thiserror::Error)]
#[error("failed to render results page: {0}")]
pub struct RenderError(#[from] askama::Error);

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    view: &'a AppViewModel,
    status_class: &'static str,
    loading_text: &'static str,
    cards: String,
}

#[derive(Template)]
#[template(path = "cards.html")]
struct CardsTemplate<'a> {
    cards: &'a [JobCardView],
    view_posting_text: &'static str,
}

/// Full page: search form values, status, loading indicator, stats and cards.
pub fn render_page(view: &AppViewModel) -> Result<String, RenderError> {
    let page = PageTemplate {
        view,
        status_class: status_class(view.status.style),
        loading_text: LOADING_TEXT,
        cards: render_cards(&view.cards)?,
    };
    Ok(page.render()?)
}

pub fn render_cards(cards: &[JobCardView]) -> Result<String, RenderError> {
    let template = CardsTemplate {
        cards,
        view_posting_text: VIEW_POSTING_TEXT,
    };
    Ok(template.render()?)
}

fn status_class(style: StatusStyle) -> &'static str {
    match style {
        StatusStyle::Plain => "message",
        StatusStyle::Success => "message success",
        StatusStyle::Error => "message error",
    }
}
