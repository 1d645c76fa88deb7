pub mod card;
pub mod lesson;
pub mod platform;
pub mod sandbox;
pub mod scroll;

#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use zoon;
