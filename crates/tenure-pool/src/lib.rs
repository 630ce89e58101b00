//! Bounded worker pool for repository analysis.
//!
//! Repository paths are loaded once into a [`WorkQueue`], drained
//! concurrently by a fixed-size [`pool::run`] of OS threads, and each
//! analysis result lands in a [`ResultSink`]. The queue and the sink are
//! the only shared state, passed explicitly into every worker; queue
//! exhaustion is the sole termination signal.

pub mod pool;
pub mod queue;
pub mod sink;

pub use pool::{default_workers, run, PoolReport};
pub use queue::WorkQueue;
pub use sink::ResultSink;
