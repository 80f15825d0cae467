pub mod articles;
pub mod topics;

pub use articles::ArticleDto;
pub use topics::TopicDto;
