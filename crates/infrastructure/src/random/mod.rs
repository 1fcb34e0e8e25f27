pub mod fastrand_source;

pub use fastrand_source::{SeededRandom, ThreadRandom};
