//! The environment typemap.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

/// A typemap of values flowing down the composition tree.
///
/// Every [`body`](crate::View::body) receives the environment assembled by
/// its ancestors; installing a value affects descendants only. At most one
/// value per type is installed, so the type itself is the key. Wrap domain
/// values in dedicated newtypes rather than installing bare primitives.
///
/// Cloning is cheap: values are shared behind `Rc`, and a clone extends its
/// own map without touching the original.
#[derive(Clone, Default)]
pub struct Environment {
    values: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .finish()
    }
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the installed value of type `T`, if any.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }

    /// Whether a value of type `T` is installed.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    /// Installs `value`, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Removes the installed value of type `T`.
    pub fn remove<T: 'static>(&mut self) {
        self.values.remove(&TypeId::of::<T>());
    }

    /// Returns this environment with `value` installed.
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Label(&'static str);

    #[test]
    fn get_returns_installed_value() {
        let env = Environment::new().with(Label("root"));
        assert_eq!(env.get::<Label>(), Some(&Label("root")));
        assert!(env.contains::<Label>());
    }

    #[test]
    fn missing_type_is_none() {
        let env = Environment::new();
        assert_eq!(env.get::<Label>(), None);
    }

    #[test]
    fn insert_replaces_previous_value() {
        let env = Environment::new().with(Label("first")).with(Label("second"));
        assert_eq!(env.get::<Label>(), Some(&Label("second")));
    }

    #[test]
    fn clones_extend_independently() {
        let parent = Environment::new().with(Label("parent"));
        let child = parent.clone().with(42u8);

        assert!(child.contains::<u8>());
        assert!(!parent.contains::<u8>());
        assert_eq!(child.get::<Label>(), Some(&Label("parent")));
    }

    #[test]
    fn remove_uninstalls() {
        let mut env = Environment::new().with(Label("gone"));
        env.remove::<Label>();
        assert!(!env.contains::<Label>());
    }
}
