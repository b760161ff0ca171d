//! Background thread that swaps the active log file once per day.
//!
//! One mutex guards the active file and the deadline. Writers and the rotation thread both
//! take it, so a write lands entirely in the old file or entirely in the new one. The
//! thread sleeps on a condvar between polls; stopping notifies it, so shutdown never waits
//! out a full polling interval.

use super::clock::Clock;
use super::schedule::RotationSchedule;
use crate::internal;
use crate::output::{FileSink, Sink, validate_path};
use chrono::{DateTime, Local};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default gap between deadline checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Everything the lock protects.
struct State {
    file: Option<FileSink>,
    /// Path of `file`, or the path still waiting to be opened when `file` is `None`.
    path: PathBuf,
    deadline: DateTime<Local>,
    rotations: u64,
    stopped: bool,
}

struct Shared {
    state: Mutex<State>,
    wake: Condvar,
    schedule: RotationSchedule,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Closes the current file and opens the one named for `now`.
    fn rotate(&self, state: &mut State, now: DateTime<Local>) {
        if let Some(old) = state.file.take()
            && let Err(e) = old.close()
        {
            internal::warn(
                "ROTATION",
                &format!("Flush before rotation failed for {}: {e}", state.path.display()),
            );
        }

        state.deadline = self.schedule.advance(state.deadline, now);
        state.rotations += 1;

        let rendered = self.schedule.render_path(now);
        let opened = validate_path(&rendered).and_then(FileSink::open_validated);

        match opened {
            Ok(sink) => {
                internal::info(
                    "ROTATION",
                    &format!("Rotated to {} (next at {})", sink.path().display(), state.deadline),
                );
                state.path = sink.path().to_path_buf();
                state.file = Some(sink);
            }
            Err(e) => {
                internal::error(
                    "ROTATION",
                    &format!("Rotation to {rendered} failed ({e}), reopening previous file"),
                );
                self.reopen(state);
            }
        }
    }

    /// Tries to (re)open `state.path`. Leaves `file` empty on failure for the next poll.
    fn reopen(&self, state: &mut State) {
        match FileSink::open_validated(state.path.clone()) {
            Ok(sink) => state.file = Some(sink),
            Err(e) => internal::error(
                "ROTATION",
                &format!("Running without a log file, will retry: {e}"),
            ),
        }
    }

    fn run(&self) {
        let mut state = self.lock();
        loop {
            if state.stopped {
                break;
            }
            state = self
                .wake
                .wait_timeout(state, self.poll_interval)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
            if state.stopped {
                break;
            }

            let now = self.clock.now();
            if now >= state.deadline {
                self.rotate(&mut state, now);
            } else if state.file.is_none() {
                self.reopen(&mut state);
            }
        }
        internal::debug("ROTATION", "Rotation thread stopped");
    }
}

fn no_file() -> crate::Error {
    crate::Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        "no active log file",
    ))
}

/// Owns the active file and the thread that rotates it.
///
/// Dropping the scheduler stops the thread, waits for it, then flushes and closes the file.
pub struct RotationScheduler {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl RotationScheduler {
    /// Opens the first file and starts the rotation thread.
    ///
    /// # Errors
    /// [`crate::Error::ZeroPollInterval`] before anything is opened,
    /// [`crate::Error::InvalidPath`] or [`crate::Error::FileOpen`] for the first file, and
    /// [`crate::Error::Io`] if the thread cannot be spawned. No thread is left running on error.
    pub fn start(
        schedule: RotationSchedule,
        clock: Arc<dyn Clock>,
        poll_interval: Duration,
    ) -> Result<Self, crate::Error> {
        if poll_interval.is_zero() {
            return Err(crate::Error::ZeroPollInterval);
        }

        let now = clock.now();
        let path = validate_path(&schedule.render_path(now))?;
        let file = FileSink::open_validated(path.clone())?;
        let deadline = schedule.first_deadline(now);

        internal::debug(
            "ROTATION",
            &format!("Logging to {}, first rotation at {deadline}", path.display()),
        );

        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                file: Some(file),
                path,
                deadline,
                rotations: 0,
                stopped: false,
            }),
            wake: Condvar::new(),
            schedule,
            clock,
            poll_interval,
        });

        let worker = Arc::clone(&shared);
        let thread = thread::Builder::new()
            .name("sblogger-rotation".into())
            .spawn(move || worker.run())?;

        Ok(Self {
            shared,
            thread: Some(thread),
        })
    }

    /// Writes under the rotation lock.
    ///
    /// # Errors
    /// I/O errors, or an error when no file is open after a failed rotation.
    pub fn write(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        let mut state = self.shared.lock();
        state.file.as_mut().ok_or_else(no_file)?.write(bytes)
    }

    /// # Errors
    /// I/O errors from the active file.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let mut state = self.shared.lock();
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Truncates the active file.
    ///
    /// # Errors
    /// I/O errors, or an error when no file is open.
    pub fn clear(&self) -> Result<(), crate::Error> {
        let mut state = self.shared.lock();
        state.file.as_mut().ok_or_else(no_file)?.clear()
    }

    /// Path of the file currently receiving writes.
    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.shared.lock().path.clone()
    }

    #[must_use]
    pub fn rotation_count(&self) -> u64 {
        self.shared.lock().rotations
    }

    #[must_use]
    pub fn next_rotation(&self) -> DateTime<Local> {
        self.shared.lock().deadline
    }

    #[must_use]
    pub fn schedule(&self) -> &RotationSchedule {
        &self.shared.schedule
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops and joins the thread. No rotation happens after this returns. Idempotent.
    pub fn stop(&mut self) {
        self.shared.lock().stopped = true;
        self.shared.wake.notify_all();
        if let Some(handle) = self.thread.take()
            && handle.join().is_err()
        {
            internal::error("ROTATION", "Rotation thread panicked");
        }
    }
}

impl Drop for RotationScheduler {
    fn drop(&mut self) {
        self.stop();
        let mut state = self.shared.lock();
        if let Some(file) = state.file.take()
            && let Err(e) = file.close()
        {
            internal::warn(
                "ROTATION",
                &format!("Final flush failed for {}: {e}", state.path.display()),
            );
        }
    }
}
