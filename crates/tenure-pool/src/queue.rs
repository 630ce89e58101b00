//! Load-then-drain work queue.

use std::path::PathBuf;

use crossbeam_channel::{unbounded, Receiver};

/// A FIFO queue of repository paths, loaded once and drained by many
/// workers.
///
/// Built on a crossbeam channel whose sender is dropped at construction:
/// nothing can ever be enqueued afterwards, so [`WorkQueue::pop`] never has
/// a reason to block. Each path is delivered to exactly one caller, and a
/// `None` means the queue is exhausted for good — that is the workers'
/// termination signal, not an error.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tenure_pool::WorkQueue;
///
/// let queue = WorkQueue::load(vec![PathBuf::from("a"), PathBuf::from("b")]);
/// assert_eq!(queue.pop(), Some(PathBuf::from("a")));
/// assert_eq!(queue.pop(), Some(PathBuf::from("b")));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct WorkQueue {
    rx: Receiver<PathBuf>,
}

impl WorkQueue {
    /// Load the queue with every path it will ever hold.
    pub fn load(paths: Vec<PathBuf>) -> Self {
        let (tx, rx) = unbounded();
        for path in paths {
            // Receiver is held right here, so send cannot fail.
            let _ = tx.send(path);
        }
        drop(tx);
        Self { rx }
    }

    /// Take the next path, or `None` once the queue is exhausted.
    ///
    /// Non-blocking: returns immediately either way.
    pub fn pop(&self) -> Option<PathBuf> {
        self.rx.try_recv().ok()
    }

    /// Number of paths not yet popped.
    pub fn remaining(&self) -> usize {
        self.rx.len()
    }
}
