use super::event::Modifiers;

/// Receives each frame's key-down edges and modifier state.
///
/// This is the hook for non-mouse bindings. Nothing is bound by default;
/// a host that wants key actions installs its own watcher with
/// [`MouseBehaviour::set_key_watcher`](super::MouseBehaviour::set_key_watcher).
pub trait KeyWatcher {
    /// Called once per frame; `keys` is empty on frames without key edges.
    fn watch(&mut self, time: f64, keys: &[String], modifiers: Modifiers);
}

impl<F> KeyWatcher for F
where
    F: FnMut(f64, &[String], Modifiers),
{
    fn watch(&mut self, time: f64, keys: &[String], modifiers: Modifiers) {
        self(time, keys, modifiers);
    }
}
