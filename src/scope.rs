//! One-per-scene ownership for input components.
//!
//! A host composition root owns a `SceneSlot` per component kind and
//! installs exactly one instance into it. There is no global; whoever holds
//! the slot hands out references.

use crate::error::GestureError;

/// Holds at most one component. The first install wins.
#[derive(Debug)]
pub struct SceneSlot<C> {
    component: Option<C>,
}

impl<C> Default for SceneSlot<C> {
    fn default() -> Self {
        Self { component: None }
    }
}

impl<C> SceneSlot<C> {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `component` if the slot is empty.
    ///
    /// A second install is logged and rejected; the duplicate is dropped and
    /// the installed component is left untouched.
    pub fn install(&mut self, component: C) -> Result<&mut C, GestureError> {
        if self.component.is_some() {
            let name = std::any::type_name::<C>();
            log::error!("Only 1 instance of {name} can exist per scene!");
            return Err(GestureError::DuplicateInstance { component: name });
        }
        Ok(self.component.insert(component))
    }

    /// Whether a component is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.component.is_some()
    }

    /// The installed component.
    #[must_use]
    pub fn get(&self) -> Option<&C> {
        self.component.as_ref()
    }

    /// The installed component, mutably.
    pub fn get_mut(&mut self) -> Option<&mut C> {
        self.component.as_mut()
    }

    /// Remove and return the installed component, freeing the slot.
    pub fn take(&mut self) -> Option<C> {
        self.component.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_install_wins() {
        let mut slot = SceneSlot::new();
        assert_eq!(*slot.install(1_u8).unwrap(), 1);
        let err = slot.install(2).unwrap_err();
        assert!(matches!(
            err,
            GestureError::DuplicateInstance { component: "u8" }
        ));
        assert_eq!(slot.get(), Some(&1));
    }

    #[test]
    fn take_frees_the_slot() {
        let mut slot = SceneSlot::new();
        let _ = slot.install("pointer").unwrap();
        assert_eq!(slot.take(), Some("pointer"));
        assert!(!slot.is_installed());
        assert!(slot.install("again").is_ok());
    }
}
