//! Static screens: the featured news article and the related videos.

pub mod news;
pub mod video;
