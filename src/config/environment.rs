//! Environment access behind a trait

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

/// Source of environment variables
///
/// [`ProcessEnvironment`] is what the free functions of this crate use.
/// [`FixedEnvironment`] resolves against an in-memory map instead, which keeps
/// tests and embedders from having to mutate the real process environment.
pub trait Environment {
    /// Value of `key`, or `None` when unset
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The environment of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// An environment backed by a map
///
/// ```
/// use ament_index::config::{Environment, FixedEnvironment};
///
/// let env = FixedEnvironment::new().with_var("AMENT_PREFIX_PATH", "/opt/ros/jazzy");
/// assert!(env.var_os("AMENT_PREFIX_PATH").is_some());
/// assert!(env.var_os("HOME").is_none());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    vars: HashMap<String, OsString>,
}

impl FixedEnvironment {
    /// An empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(key.into(), value.as_ref().to_os_string());
        self
    }

    /// Unset `key`
    #[must_use]
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }
}

impl Environment for FixedEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}
