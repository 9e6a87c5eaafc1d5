pub mod bench;
pub mod greeter;
pub mod harness;
pub mod suite;


pub use greeter::{GREETING_PREFIX, hello_world};
