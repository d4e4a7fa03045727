//! Ctrl-C handling
//!
//! A terminal Ctrl-C reaches both dirpress and the running tool. While a
//! tool runs, dirpress stays alive so the runner can report the signal and
//! the pipeline can clean up. With no tool running, it exits immediately.

use std::sync::atomic::{AtomicBool, Ordering};

/// Exit status used when interrupted outside a tool run (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Process-wide flag consulted by the Ctrl-C handler
pub(crate) static CHILD_ACTIVITY: ChildActivity = ChildActivity::new();

/// Install the process-wide Ctrl-C handler. Call once, from `main`.
pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        if !CHILD_ACTIVITY.is_active() {
            eprintln!();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
}

/// Whether a tool is currently running
#[derive(Debug, Default)]
pub struct ChildActivity {
    active: AtomicBool,
}

impl ChildActivity {
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Mark a tool as running until the returned guard is dropped.
    ///
    /// Must be entered before the child is spawned: a Ctrl-C that lands
    /// between spawn and enter would otherwise exit and orphan the child.
    pub fn enter(&self) -> ChildGuard<'_> {
        self.active.store(true, Ordering::SeqCst);
        ChildGuard { activity: self }
    }
}

/// Marks a tool as running for as long as the guard lives
#[must_use = "the child is only marked active while the guard is alive"]
pub struct ChildGuard<'a> {
    activity: &'a ChildActivity,
}

impl Drop for ChildGuard<'_> {
    fn drop(&mut self) {
        self.activity.active.store(false, Ordering::SeqCst);
    }
}
