//! Named, resettable settings.

use crate::error::{HandctlError, Result};

/// A tunable setting identified by name, remembering its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurableFeature<T> {
    id: String,
    default: T,
    value: T,
}

impl<T: Clone> ConfigurableFeature<T> {
    /// Create a feature holding its default value.
    ///
    /// # Errors
    /// * `InvalidArgument` when `id` is empty or only whitespace
    pub fn new(id: impl Into<String>, default: T) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(HandctlError::invalid_argument(
                "configurable feature identifier is empty",
            ));
        }
        Ok(Self {
            id,
            value: default.clone(),
            default,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Replace the current value, returning the previous one.
    pub fn set(&mut self, value: T) -> T {
        log::debug!("feature {} updated", self.id);
        std::mem::replace(&mut self.value, value)
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}

impl<T: Clone + PartialEq> ConfigurableFeature<T> {
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identifier_is_rejected() {
        for id in ["", "   ", "\t"] {
            let result = ConfigurableFeature::new(id, 0);
            assert!(matches!(result, Err(HandctlError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn test_set_and_reset() {
        let mut feature = ConfigurableFeature::new("sensitivity", 0).unwrap();
        assert_eq!(feature.id(), "sensitivity");
        assert!(feature.is_default());

        assert_eq!(feature.set(3), 0);
        assert_eq!(*feature.value(), 3);
        assert_eq!(*feature.default_value(), 0);
        assert!(!feature.is_default());

        feature.reset();
        assert_eq!(*feature.value(), 0);
    }
}
