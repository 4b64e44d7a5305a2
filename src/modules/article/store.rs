// src/modules/article/store.rs
use tokio::sync::RwLock;
use tracing::info;

use super::domain::{Article, CreateArticleRequest};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArticleStoreError {
    #[error("An article titled '{}' already exists", .0.title)]
    DuplicateTitle(Box<Article>),

    #[error("Article not found")]
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub page: u32,
    pub per_page: u32,
}

/// In-memory article catalogue backing the demo routes.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    /// `page` starts at 1; a page past the end is empty.
    pub async fn list(&self, page: u32, per_page: u32) -> ArticlePage {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let skip = ((page - 1) as usize).saturating_mul(per_page as usize);

        let articles = self.articles.read().await;
        let items = articles
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect();

        ArticlePage {
            items,
            page,
            per_page,
        }
    }

    pub async fn count(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn get(&self, id: u64) -> Option<Article> {
        let articles = self.articles.read().await;
        articles.iter().find(|a| a.id == id).cloned()
    }

    /// Titles are unique, compared case-insensitively.
    pub async fn insert(&self, request: CreateArticleRequest) -> Result<Article, ArticleStoreError> {
        let mut articles = self.articles.write().await;

        let title = request.title.trim().to_lowercase();
        if let Some(existing) = articles.iter().find(|a| a.title.to_lowercase() == title) {
            return Err(ArticleStoreError::DuplicateTitle(Box::new(existing.clone())));
        }

        let id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let article = request.into_article(id);
        articles.push(article.clone());

        info!(article_id = id, "Article created");
        Ok(article)
    }

    pub async fn publish(&self, id: u64) -> Result<Article, ArticleStoreError> {
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ArticleStoreError::NotFound)?;

        article.published = true;
        Ok(article.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ArticleStoreError> {
        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|a| a.id != id);

        if articles.len() == before {
            return Err(ArticleStoreError::NotFound);
        }
        info!(article_id = id, "Article deleted");
        Ok(())
    }
}
