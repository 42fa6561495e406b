//! Utility types for the terminal front end.

mod ring_buffer;

pub use ring_buffer::RingBuffer;
