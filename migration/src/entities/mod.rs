pub mod category;
pub mod link;
pub mod link_tag;
pub mod tag;

pub use category::Entity as CategoryEntity;
pub use link::Entity as LinkEntity;
pub use link_tag::Entity as LinkTagEntity;
pub use tag::Entity as TagEntity;
