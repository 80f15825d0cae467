pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTopic, Topic, TopicFilter, TopicUpdate};
pub use repository::{TopicReadRepository, TopicWriteRepository};
pub use value_objects::{TopicId, TopicName};
