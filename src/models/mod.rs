pub mod movie;

pub use movie::{Dataset, MovieRecord};
