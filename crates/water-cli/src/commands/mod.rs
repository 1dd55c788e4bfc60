pub mod random;
pub mod scenarios;
