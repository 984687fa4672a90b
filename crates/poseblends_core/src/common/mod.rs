pub mod channels;
pub mod driver;
pub mod joint;
pub mod metadata;
pub mod types;
pub mod weights;
