//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ChatError;

/// Guard that clears the in-flight flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Attempt to mark the session in-flight. Returns `Err` if a request
    /// is already outstanding.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::SessionBusy);
        }
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_held() {
        let flag = AtomicBool::new(false);
        let guard = InFlightGuard::acquire(&flag).unwrap();
        assert!(matches!(
            InFlightGuard::acquire(&flag),
            Err(ChatError::SessionBusy)
        ));
        drop(guard);
        assert!(InFlightGuard::acquire(&flag).is_ok());
    }

    #[test]
    fn drop_releases_flag() {
        let flag = AtomicBool::new(false);
        {
            let _guard = InFlightGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(!flag.load(Ordering::Acquire));
    }
}
