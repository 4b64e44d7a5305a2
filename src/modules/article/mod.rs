pub mod domain;
pub mod routes;
pub mod store;

pub use domain::{Article, Author, AuthorRequest, CreateArticleRequest};
pub use routes::configure_routes;
pub use store::{ArticleStore, ArticleStoreError};
