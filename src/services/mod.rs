pub mod providers;
pub mod search;
pub mod streams;
pub mod video_id;
