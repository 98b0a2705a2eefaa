//! Component state: the display controller plus the article it renders into.

use common::display::{DisplayController, RenderSink};

/// The page's article section. Every render replaces title and body.
#[derive(Debug, Default)]
pub struct Article {
    pub title: String,
    pub body: String,
}

impl RenderSink for Article {
    fn render(&mut self, title: &str, html: String) {
        self.title = title.to_string();
        self.body = html;
    }
}

pub struct PersonasComponent {
    pub controller: DisplayController,
    pub article: Article,
    /// Guard for the one-time load of the home view.
    pub loaded: bool,
}

impl PersonasComponent {
    pub fn new() -> Self {
        Self {
            controller: DisplayController::new(),
            article: Article::default(),
            loaded: false,
        }
    }
}
