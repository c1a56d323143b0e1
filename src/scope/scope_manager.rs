use std::{collections::HashMap, fmt::Debug};

use tracing::debug;

use crate::lexer::symbols::Symbol;

type Frame<V> = HashMap<Symbol, V>;

/// A stack of binding frames, innermost last.
///
/// Frames are only pushed and popped in matched `begin_scope`/`end_scope`
/// pairs. Calling `end_scope` or `put` with no open scope is a bug in the
/// caller's nesting and panics.
#[derive(Debug)]
pub struct ScopeManager<V> {
    frames: Vec<Frame<V>>,
}

impl<V> Default for ScopeManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ScopeManager<V> {
    pub fn new() -> Self {
        ScopeManager { frames: Vec::new() }
    }

    /// Pushes a new empty frame.
    pub fn begin_scope(&mut self) {
        self.frames.push(HashMap::new());
        debug!(depth = self.frames.len(), "entered scope");
    }

    /// Pops the innermost frame, dropping its bindings.
    ///
    /// # Panics
    ///
    /// If no scope is open.
    pub fn end_scope(&mut self) {
        let frame = self
            .frames
            .pop()
            .unwrap_or_else(|| panic!("end_scope called with no open scope"));

        debug!(
            depth = self.frames.len(),
            bindings = frame.len(),
            "left scope"
        );
    }

    /// Binds `symbol` in the innermost frame.
    ///
    /// Rebinding a symbol already bound in that same frame overwrites it; the
    /// previous value is logged and returned. Bindings in outer frames are
    /// shadowed, never touched.
    ///
    /// # Panics
    ///
    /// If no scope is open.
    pub fn put(&mut self, symbol: Symbol, value: V) -> Option<V>
    where
        V: Debug,
    {
        let frame = self
            .frames
            .last_mut()
            .unwrap_or_else(|| panic!("put called with no open scope"));

        let previous = frame.insert(symbol, value);
        if let Some(previous) = &previous {
            debug!(symbol = symbol.id(), ?previous, "overwrote binding");
        }

        previous
    }

    /// Looks `symbol` up innermost frame first. Not finding it is not an error.
    pub fn get(&self, symbol: Symbol) -> Option<&V> {
        self.frames.iter().rev().find_map(|frame| frame.get(&symbol))
    }

    /// Looks `symbol` up in the innermost frame only.
    pub fn get_local(&self, symbol: Symbol) -> Option<&V> {
        self.frames.last().and_then(|frame| frame.get(&symbol))
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
