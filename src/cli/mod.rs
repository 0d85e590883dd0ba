pub mod add;
pub mod delete;
pub mod editor;
pub mod list;
pub mod note;
pub mod search;
pub mod ssh;
