pub mod mean;
pub mod mean_ratio;
pub mod neighborhood;
pub mod operator;
pub mod sample;
