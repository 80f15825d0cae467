mod articles;
mod get_by_id;
mod list;
mod service;

pub use articles::ListTopicArticlesQuery;
pub use get_by_id::GetTopicByIdQuery;
pub use list::ListTopicsQuery;
pub use service::TopicQueryService;
