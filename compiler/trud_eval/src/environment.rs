//! Two-tier variable environment.
//!
//! One global scope lives for the whole run. A call installs a single flat
//! local scope holding its parameters; lookups try it first, then the
//! globals. The caller's local scope is set aside for the duration of the
//! call, so a callee never sees it.

use rustc_hash::FxHashMap;

use crate::Value;

/// A flat set of bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Bind `name`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Scope {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Scope {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Global scope plus the local scope of the active call, if any.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    globals: Scope,
    local: Option<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Local scope first, then globals.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.local
            .as_ref()
            .and_then(|scope| scope.lookup(name))
            .or_else(|| self.globals.lookup(name))
    }

    /// Bind at the top level. Redeclaration overwrites.
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.define(name, value);
    }

    pub fn globals(&self) -> &Scope {
        &self.globals
    }

    /// Install `scope` as the local scope, returning the one it replaces.
    /// Pass the returned value to [`Environment::restore_local`] when the
    /// call finishes.
    #[must_use]
    pub fn enter_local(&mut self, scope: Scope) -> Option<Scope> {
        self.local.replace(scope)
    }

    pub fn restore_local(&mut self, previous: Option<Scope>) {
        self.local = previous;
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        self.globals = Scope::new();
        self.local = None;
    }
}

#[cfg(test)]
mod tests;
