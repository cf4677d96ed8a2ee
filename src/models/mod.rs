pub mod review;
pub mod school;
