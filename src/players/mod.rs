pub mod greedy;
pub mod policy;
