// libntag/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MemoryTag, MockTransceiver};
pub use traits::{PageReader, Transceiver};
