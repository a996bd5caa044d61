pub mod config;
pub mod note;
pub mod note_methods;
