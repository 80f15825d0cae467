pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleAuthor, ArticleContent, ArticleId, ArticleStatus, ArticleTitle};
