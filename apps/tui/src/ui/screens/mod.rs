pub mod help;
pub mod layout;
pub mod news;
pub mod not_found;
pub mod report;
pub mod sign_in;
pub mod video;
