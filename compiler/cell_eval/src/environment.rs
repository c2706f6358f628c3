//! Scope chain for name lookup.
//!
//! Every scope is a write-once table of bindings plus an optional parent.
//! Scopes are shared: a function value keeps its defining scope alive, and
//! sibling closures can point at the same parent.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::fmt;
use std::rc::Rc;

use crate::Value;
use cell_ir::Name;

/// Error returned by scope operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeError {
    /// `set` on a name already bound in the same scope.
    AlreadyDefined,
    /// `assign` on a name bound nowhere in the chain.
    Undefined,
}

/// A single-threaded, reference-counted scope handle.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope only.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        match self.bindings.entry(name) {
            Entry::Occupied(_) => Err(ScopeError::AlreadyDefined),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Look `name` up here, then in each enclosing scope.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(ScopeError::Undefined)
    }
}

/// Handle to a scope in the chain.
///
/// Cloning the handle shares the scope. Bindings are write-once through
/// [`set`](Environment::set); [`assign`](Environment::assign) is the one
/// path that changes an existing binding.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A new empty scope whose parent is this one.
    #[must_use]
    pub fn new_scope(&self) -> Self {
        Environment(LocalScope::new(Scope::with_parent(self.0.clone())))
    }

    /// Bind `name` in this scope. Names bound in enclosing scopes may be
    /// shadowed; a name already bound here may not.
    pub fn set(&self, name: Name, value: Value) -> Result<(), ScopeError> {
        self.0.borrow_mut().define(name, value)
    }

    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Overwrite the nearest existing binding of `name`, bypassing the
    /// write-once rule.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), ScopeError> {
        self.0.borrow_mut().assign(name, value)
    }

    /// Names bound in this scope (not its parents).
    pub fn local_names(&self) -> Vec<Name> {
        self.0.borrow().bindings.keys().copied().collect()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.0.borrow().bindings.len())
            .field("has_parent", &self.0.borrow().parent.is_some())
            .finish()
    }
}
