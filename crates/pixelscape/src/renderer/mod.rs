pub mod camera;
pub mod post;
