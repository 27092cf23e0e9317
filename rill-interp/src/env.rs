//! Lexical scopes.
//!
//! All scopes live in one arena and refer to their parent by handle, so
//! resolution is a walk up parent links with no shared ownership involved.

use crate::error::RuntimeError;
use rill_value::Value;
use std::collections::HashMap;

/// Handle into a [`ScopeChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug)]
struct Scope {
    variables: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Arena of scopes. Index 0 is the global scope and is never removed;
/// scopes pushed after a [`ScopeChain::mark`] are discarded in stack order
/// by the matching [`ScopeChain::truncate`].
#[derive(Debug)]
pub struct ScopeChain {
    scopes: Vec<Scope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                variables: HashMap::new(),
                parent: None,
            }],
        }
    }

    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a new empty scope whose lookups fall through to `parent`.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            variables: HashMap::new(),
            parent: Some(parent),
        });
        id
    }

    /// Current high-water mark, to be passed to [`Self::truncate`] once the
    /// scopes pushed after it are dead.
    pub fn mark(&self) -> usize {
        self.scopes.len()
    }

    pub fn truncate(&mut self, mark: usize) {
        debug_assert!(mark >= 1);
        self.scopes.truncate(mark);
    }

    /// Defines `name` in `scope` itself. Redefinition within one scope is an
    /// error; shadowing a name from an enclosing scope is not.
    pub fn define(
        &mut self,
        scope: ScopeId,
        name: &str,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let variables = &mut self.scopes[scope.0].variables;
        if variables.contains_key(name) {
            return Err(RuntimeError::AlreadyDefined(name.to_string()));
        }
        variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Resolves `name` in `scope` or the nearest enclosing scope that
    /// defines it.
    pub fn get(&self, scope: ScopeId, name: &str) -> Result<Value, RuntimeError> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.variables.get(name) {
                return Ok(value.clone());
            }
            current = scope.parent;
        }
        Err(RuntimeError::UndefinedVariable(name.to_string()))
    }

    /// Assigns to an existing variable, resolved like [`Self::get`].
    pub fn assign(
        &mut self,
        scope: ScopeId,
        name: &str,
        value: Value,
    ) -> Result<(), RuntimeError> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &mut self.scopes[id.0];
            if let Some(slot) = scope.variables.get_mut(name) {
                *slot = value;
                return Ok(());
            }
            current = scope.parent;
        }
        Err(RuntimeError::UndefinedVariable(name.to_string()))
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self::new()
    }
}
