use crate::modules::article::{Article, Author, AuthorRequest, CreateArticleRequest};

pub fn article(id: u64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        body: format!("Body of {}", title),
        tags: vec!["rust".to_string()],
        author: Author {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
        },
        published: false,
    }
}

pub fn create_request(title: &str) -> CreateArticleRequest {
    CreateArticleRequest {
        title: title.to_string(),
        body: "Enough words for a body.".to_string(),
        tags: vec!["rust".to_string()],
        author: Some(AuthorRequest {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
        }),
    }
}
