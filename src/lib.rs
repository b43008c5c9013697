pub mod harness;
pub mod inspect;
pub mod paths;
