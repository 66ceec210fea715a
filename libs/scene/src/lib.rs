pub mod category;
pub mod genre;
pub mod model;
pub mod timestamp;
pub mod value;

pub use model::{Labels, Scene, VideoData};
