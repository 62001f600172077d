//! The per-frame pointer component.
//!
//! `MouseBehaviour` owns all transient pointer state (hovered target,
//! open gesture, subscribers) and is the only thing that mutates it. The
//! host constructs one, keeps it, and calls
//! [`update`](MouseBehaviour::update) once per frame.

use super::event::PointerFrame;
use super::keys::KeyWatcher;
use crate::gesture::{Gesture, GestureClassifier, GestureEvent};
use crate::options::{GestureOptions, Options, PointerOptions};
use crate::picking::Raycaster;
use crate::target::{
    CallbackId, PointerTarget, TargetCallbacks, TargetTracker,
    TargetTransition,
};

/// A notification produced by one frame, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent<T> {
    /// The pointer moved off a target.
    TargetLeave(T),
    /// The pointer moved onto a target.
    TargetEnter(T),
    /// The pointer moved onto empty space; the enter channel was notified
    /// with `None`.
    TargetCleared,
    /// A gesture notification.
    Gesture(GestureEvent),
}

/// Tracks the hovered target and classifies pointer gestures.
///
/// # Usage
///
/// ```
/// use glam::Vec2;
/// use pointer_gestures::input::{MouseBehaviour, MouseButton, PointerFrame};
/// use pointer_gestures::options::Options;
/// use pointer_gestures::picking::{Collider, ColliderSet};
///
/// let scene = ColliderSet::from(vec![Collider {
///     name: "crate".into(),
///     min: Vec2::ZERO,
///     max: Vec2::splat(10.0),
///     depth: 5.0,
///     layer: 0,
/// }]);
/// let mut pointer = MouseBehaviour::new(&Options::default());
///
/// let frame = PointerFrame::new(0.0, Vec2::splat(1.0))
///     .with_pressed(MouseButton::Left);
/// let events = pointer.update(&frame, &scene);
/// assert_eq!(events.len(), 1); // entered "crate"
/// assert!(pointer.current_gesture().is_some());
/// ```
pub struct MouseBehaviour<T> {
    pointer: PointerOptions,
    targets: TargetTracker<T>,
    gestures: GestureClassifier,
    callbacks: TargetCallbacks<T>,
    key_watcher: Option<Box<dyn KeyWatcher>>,
}

impl<T: Clone + PartialEq + PointerTarget> MouseBehaviour<T> {
    /// Create an idle component from options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            pointer: options.pointer,
            targets: TargetTracker::new(),
            gestures: GestureClassifier::new(options.gestures.clone()),
            callbacks: TargetCallbacks::new(),
            key_watcher: None,
        }
    }

    /// Hit-test reach and mask.
    #[must_use]
    pub fn pointer_options(&self) -> &PointerOptions {
        &self.pointer
    }

    /// Replace hit-test reach and mask; takes effect next frame.
    pub fn set_pointer_options(&mut self, pointer: PointerOptions) {
        self.pointer = pointer;
    }

    /// Replace gesture thresholds.
    pub fn set_gesture_options(&mut self, gestures: GestureOptions) {
        self.gestures.set_thresholds(gestures);
    }

    /// Read-only access to the gesture state machine.
    #[must_use]
    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }

    /// Target currently under the pointer.
    #[must_use]
    pub fn current_target(&self) -> Option<&T> {
        self.targets.current()
    }

    /// Target hovered before the current one.
    #[must_use]
    pub fn last_target(&self) -> Option<&T> {
        self.targets.last()
    }

    /// The open gesture, if any.
    #[must_use]
    pub fn current_gesture(&self) -> Option<&Gesture> {
        self.gestures.current()
    }

    /// Subscribe to target-enter notifications.
    pub fn on_target_enter(
        &mut self,
        callback: impl FnMut(Option<&T>) + 'static,
    ) -> CallbackId {
        self.callbacks.subscribe_enter(callback)
    }

    /// Subscribe to target-leave notifications.
    pub fn on_target_leave(
        &mut self,
        callback: impl FnMut(Option<&T>) + 'static,
    ) -> CallbackId {
        self.callbacks.subscribe_leave(callback)
    }

    /// Remove an enter or leave subscription.
    pub fn unsubscribe(&mut self, id: CallbackId) -> bool {
        self.callbacks.unsubscribe(id)
    }

    /// Install the key-watch hook, replacing any previous one.
    pub fn set_key_watcher(&mut self, watcher: impl KeyWatcher + 'static) {
        self.key_watcher = Some(Box::new(watcher));
    }

    /// Remove the key-watch hook.
    pub fn clear_key_watcher(&mut self) {
        self.key_watcher = None;
    }

    /// Drop the open gesture without emitting (e.g. window lost focus).
    pub fn cancel_gesture(&mut self) {
        self.gestures.reset();
    }

    /// Run one frame: hit test, target tracking, key watch, gestures.
    ///
    /// Enter/leave subscribers and the targets' own
    /// [`PointerTarget`] messages are invoked before this returns; the
    /// returned list repeats every notification in the order it fired.
    pub fn update(
        &mut self,
        frame: &PointerFrame,
        raycaster: &impl Raycaster<T>,
    ) -> Vec<PointerEvent<T>> {
        let mut events = Vec::new();

        let hit = raycaster.raycast(
            frame.position,
            self.pointer.max_distance,
            self.pointer.target_mask,
        );
        if let Some(transition) = self.targets.update(hit) {
            self.dispatch_transition(transition, &mut events);
        }

        if let Some(watcher) = &mut self.key_watcher {
            watcher.watch(frame.time, &frame.keys, frame.modifiers);
        }

        events.extend(
            self.gestures
                .update(frame)
                .into_iter()
                .map(PointerEvent::Gesture),
        );
        events
    }

    /// Leave strictly before enter.
    fn dispatch_transition(
        &mut self,
        transition: TargetTransition<T>,
        events: &mut Vec<PointerEvent<T>>,
    ) {
        let TargetTransition { left, entered } = transition;

        if let Some(old) = left {
            old.pointer_left();
            self.callbacks.notify_leave(Some(&old));
            events.push(PointerEvent::TargetLeave(old));
        }

        self.callbacks.notify_enter(entered.as_ref());
        match entered {
            Some(new) => {
                new.pointer_entered();
                events.push(PointerEvent::TargetEnter(new));
            }
            None => events.push(PointerEvent::TargetCleared),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::gesture::GestureEventKind;
    use crate::input::MouseButton;
    use crate::picking::LayerMask;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Debug, Clone)]
    struct Node {
        id: u32,
        log: Log,
    }

    impl PartialEq for Node {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl PointerTarget for Node {
        fn pointer_entered(&self) {
            self.log.borrow_mut().push(format!("entered {}", self.id));
        }

        fn pointer_left(&self) {
            self.log.borrow_mut().push(format!("left {}", self.id));
        }
    }

    /// Raycaster that returns whatever the test put in `hit`.
    struct Scripted {
        hit: RefCell<Option<Node>>,
        seen: RefCell<Vec<(f32, LayerMask)>>,
    }

    impl Raycaster<Node> for Scripted {
        fn raycast(
            &self,
            _position: Vec2,
            max_distance: f32,
            mask: LayerMask,
        ) -> Option<Node> {
            self.seen.borrow_mut().push((max_distance, mask));
            self.hit.borrow().clone()
        }
    }

    fn setup() -> (MouseBehaviour<Node>, Scripted, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut behaviour: MouseBehaviour<Node> =
            MouseBehaviour::new(&Options::default());
        let enter_log = Rc::clone(&log);
        let _ = behaviour.on_target_enter(move |t| {
            enter_log
                .borrow_mut()
                .push(format!("on_enter {:?}", t.map(|n| n.id)));
        });
        let leave_log = Rc::clone(&log);
        let _ = behaviour.on_target_leave(move |t| {
            leave_log
                .borrow_mut()
                .push(format!("on_leave {:?}", t.map(|n| n.id)));
        });
        let scripted = Scripted {
            hit: RefCell::new(None),
            seen: RefCell::new(Vec::new()),
        };
        (behaviour, scripted, log)
    }

    fn node(id: u32, log: &Log) -> Node {
        Node {
            id,
            log: Rc::clone(log),
        }
    }

    fn frame(time: f64) -> PointerFrame {
        PointerFrame::new(time, Vec2::ZERO)
    }

    #[test]
    fn leave_always_precedes_enter() {
        let (mut behaviour, scripted, log) = setup();

        *scripted.hit.borrow_mut() = Some(node(1, &log));
        let _ = behaviour.update(&frame(0.0), &scripted);
        *scripted.hit.borrow_mut() = Some(node(2, &log));
        let events = behaviour.update(&frame(0.1), &scripted);
        *scripted.hit.borrow_mut() = None;
        let _ = behaviour.update(&frame(0.2), &scripted);

        assert_eq!(
            *log.borrow(),
            vec![
                "on_enter Some(1)",
                "entered 1",
                "left 1",
                "on_leave Some(1)",
                "on_enter Some(2)",
                "entered 2",
                "left 2",
                "on_leave Some(2)",
                "on_enter None",
            ]
        );
        assert_eq!(
            events,
            vec![
                PointerEvent::TargetLeave(node(1, &log)),
                PointerEvent::TargetEnter(node(2, &log)),
            ]
        );
        assert_eq!(behaviour.last_target().map(|n| n.id), Some(2));
        assert!(behaviour.current_target().is_none());
    }

    #[test]
    fn unchanged_target_notifies_nothing() {
        let (mut behaviour, scripted, log) = setup();
        *scripted.hit.borrow_mut() = Some(node(1, &log));
        let _ = behaviour.update(&frame(0.0), &scripted);
        log.borrow_mut().clear();

        for i in 1..5 {
            let events = behaviour.update(&frame(f64::from(i) * 0.1), &scripted);
            assert!(events.is_empty());
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn raycast_uses_configured_reach_and_mask() {
        let (mut behaviour, scripted, _log) = setup();
        behaviour.set_pointer_options(PointerOptions {
            max_distance: 3.5,
            target_mask: LayerMask::layer(2),
        });
        let _ = behaviour.update(&frame(0.0), &scripted);
        assert_eq!(*scripted.seen.borrow(), vec![(3.5, LayerMask::layer(2))]);
    }

    #[test]
    fn target_and_gesture_events_share_a_frame() {
        let (mut behaviour, scripted, log) = setup();
        *scripted.hit.borrow_mut() = Some(node(7, &log));
        let down = frame(0.0)
            .with_pressed(MouseButton::Left)
            .with_released(MouseButton::Left);
        let events = behaviour.update(&down, &scripted);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], PointerEvent::TargetEnter(node(7, &log)));
        assert!(matches!(
            events[1],
            PointerEvent::Gesture(GestureEvent {
                kind: GestureEventKind::Click,
                ..
            })
        ));
    }

    #[test]
    fn hold_scenario() {
        let (mut behaviour, scripted, _log) = setup();
        let mut fired = Vec::new();
        let frames = [
            frame(0.0).with_pressed(MouseButton::Left),
            frame(0.1),
            frame(0.25),
            frame(0.4),
            frame(0.5).with_released(MouseButton::Left),
        ];
        for f in &frames {
            for event in behaviour.update(f, &scripted) {
                if let PointerEvent::Gesture(g) = event {
                    fired.push((g.time, g.kind));
                }
            }
        }
        assert_eq!(
            fired,
            vec![
                (0.25, GestureEventKind::HoldStart),
                (0.4, GestureEventKind::HoldStay),
                (0.5, GestureEventKind::HoldEnd),
            ]
        );
    }

    #[test]
    fn key_watcher_runs_every_frame() {
        let (mut behaviour, scripted, _log) = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        behaviour.set_key_watcher(
            move |time: f64, keys: &[String], mods: crate::input::Modifiers| {
                sink.borrow_mut().push((time, keys.to_vec(), mods.shift));
            },
        );
        let _ = behaviour.update(&frame(0.0), &scripted);
        let shifted = frame(0.1).with_key("Escape").with_modifiers(
            crate::input::Modifiers {
                shift: true,
                ..crate::input::Modifiers::NONE
            },
        );
        let _ = behaviour.update(&shifted, &scripted);
        assert_eq!(
            *seen.borrow(),
            vec![
                (0.0, Vec::new(), false),
                (0.1, vec!["Escape".to_owned()], true)
            ]
        );

        behaviour.clear_key_watcher();
        let _ = behaviour.update(&frame(0.2).with_key("KeyQ"), &scripted);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn moving_onto_empty_space_is_reported() {
        let (mut behaviour, scripted, log) = setup();
        *scripted.hit.borrow_mut() = Some(node(3, &log));
        let _ = behaviour.update(&frame(0.0), &scripted);
        *scripted.hit.borrow_mut() = None;
        let events = behaviour.update(&frame(0.1), &scripted);

        assert_eq!(
            events,
            vec![
                PointerEvent::TargetLeave(node(3, &log)),
                PointerEvent::TargetCleared,
            ]
        );
        // Each enter-channel call has a matching entry in the returned
        // lists: `TargetEnter(3)` on the first frame, `TargetCleared` here.
        let enters: Vec<String> = log
            .borrow()
            .iter()
            .filter(|line| line.starts_with("on_enter"))
            .cloned()
            .collect();
        assert_eq!(enters, vec!["on_enter Some(3)", "on_enter None"]);
    }

    #[test]
    fn cancel_drops_open_gesture() {
        let (mut behaviour, scripted, _log) = setup();
        let _ = behaviour
            .update(&frame(0.0).with_pressed(MouseButton::Right), &scripted);
        assert!(behaviour.current_gesture().is_some());
        behaviour.cancel_gesture();
        assert!(behaviour.current_gesture().is_none());
        let events = behaviour
            .update(&frame(0.1).with_released(MouseButton::Right), &scripted);
        assert!(events.is_empty());
    }
}
