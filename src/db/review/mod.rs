pub mod aggregate;
pub mod delete;
pub mod get;
pub mod helpful;
pub mod post;
pub mod put;
