/// Identifies a subscription so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

type TargetCallback<T> = Box<dyn FnMut(Option<&T>)>;

/// Multicast enter/leave observer channels.
///
/// Callbacks run in subscription order. Each receives the target, or
/// `None` when the pointer moved onto empty space.
pub struct TargetCallbacks<T> {
    next_id: u64,
    enter: Vec<(CallbackId, TargetCallback<T>)>,
    leave: Vec<(CallbackId, TargetCallback<T>)>,
}

impl<T> Default for TargetCallbacks<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            enter: Vec::new(),
            leave: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for TargetCallbacks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetCallbacks")
            .field("enter", &self.enter.len())
            .field("leave", &self.leave.len())
            .finish()
    }
}

impl<T> TargetCallbacks<T> {
    /// No subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to target-enter notifications.
    pub fn subscribe_enter(
        &mut self,
        callback: impl FnMut(Option<&T>) + 'static,
    ) -> CallbackId {
        let id = self.next_id();
        self.enter.push((id, Box::new(callback)));
        id
    }

    /// Subscribe to target-leave notifications.
    pub fn subscribe_leave(
        &mut self,
        callback: impl FnMut(Option<&T>) + 'static,
    ) -> CallbackId {
        let id = self.next_id();
        self.leave.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription from whichever channel holds it. Returns
    /// whether it was found.
    pub fn unsubscribe(&mut self, id: CallbackId) -> bool {
        let before = self.enter.len() + self.leave.len();
        self.enter.retain(|(cb_id, _)| *cb_id != id);
        self.leave.retain(|(cb_id, _)| *cb_id != id);
        self.enter.len() + self.leave.len() != before
    }

    /// Number of enter subscribers.
    #[must_use]
    pub fn enter_count(&self) -> usize {
        self.enter.len()
    }

    /// Number of leave subscribers.
    #[must_use]
    pub fn leave_count(&self) -> usize {
        self.leave.len()
    }

    pub(crate) fn notify_enter(&mut self, target: Option<&T>) {
        for (_, callback) in &mut self.enter {
            callback(target);
        }
    }

    pub(crate) fn notify_leave(&mut self, target: Option<&T>) {
        for (_, callback) in &mut self.leave {
            callback(target);
        }
    }

    fn next_id(&mut self) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn callbacks_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut callbacks = TargetCallbacks::<u32>::new();
        let first = Rc::clone(&log);
        let _ = callbacks.subscribe_enter(move |t| {
            first.borrow_mut().push(("first", t.copied()));
        });
        let second = Rc::clone(&log);
        let _ = callbacks.subscribe_enter(move |t| {
            second.borrow_mut().push(("second", t.copied()));
        });

        callbacks.notify_enter(Some(&4));
        callbacks.notify_enter(None);
        assert_eq!(
            *log.borrow(),
            vec![
                ("first", Some(4)),
                ("second", Some(4)),
                ("first", None),
                ("second", None)
            ]
        );
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let hits = Rc::new(RefCell::new(0));
        let mut callbacks = TargetCallbacks::<u32>::new();
        let counter = Rc::clone(&hits);
        let id = callbacks.subscribe_leave(move |_| {
            *counter.borrow_mut() += 1;
        });
        let _ = callbacks.subscribe_enter(|_| {});

        assert!(callbacks.unsubscribe(id));
        assert!(!callbacks.unsubscribe(id));
        callbacks.notify_leave(Some(&1));
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(callbacks.enter_count(), 1);
        assert_eq!(callbacks.leave_count(), 0);
    }
}
