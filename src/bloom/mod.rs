pub mod generator;
pub mod style;
pub mod stylesheet;

pub use generator::{ANIMATE_CLASS, BLOOM_CLASS, BLOOM_TAG, Generation, clear, generate};
pub use style::{Animation, BloomStyle};
pub use stylesheet::{STYLESHEET, STYLESHEET_ID};
