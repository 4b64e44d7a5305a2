use std::sync::Arc;

use crate::modules::article::{Article, ArticleStore};
use crate::AppState;

pub const TEST_EDITOR_TOKEN: &str = "test-editor-token";

#[derive(Default)]
pub struct TestAppStateBuilder {
    articles: Vec<Article>,
    editor_token: Option<String>,
}

impl TestAppStateBuilder {
    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = articles;
        self
    }

    pub fn with_editor_token(mut self, token: &str) -> Self {
        self.editor_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            articles: Arc::new(ArticleStore::with_articles(self.articles)),
            editor_token: self
                .editor_token
                .unwrap_or_else(|| TEST_EDITOR_TOKEN.to_string()),
        }
    }
}
