//! Canonical symbols for source text.
//!
//! Every identifier, keyword and operator spelling is interned once per
//! [`Interner`]. The interner remembers the lexical kind the text was first
//! seen with, and that kind stays authoritative: the scanner interns every
//! word as an identifier and keywords still come back with their keyword kind.

use std::collections::HashMap;

use intaglio::{SymbolOverflowError, SymbolTable};

use super::tokens::{TokenKind, SEEDED_SYMBOLS};

/// Handle to an interned piece of source text.
///
/// Two handles from the same interner are equal exactly when they were
/// interned from the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(intaglio::Symbol);

impl Symbol {
    pub fn id(self) -> u32 {
        self.0.id()
    }
}

/// One interning context, usually one per parse session.
#[derive(Debug)]
pub struct Interner {
    table: SymbolTable,
    kinds: HashMap<intaglio::Symbol, TokenKind>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    /// Creates an interner seeded with the keyword, class placeholder and
    /// operator symbols.
    pub fn new() -> Self {
        let mut interner = Interner {
            table: SymbolTable::new(),
            kinds: HashMap::with_capacity(SEEDED_SYMBOLS.len()),
        };

        for (text, kind) in SEEDED_SYMBOLS {
            let id = interner
                .table
                .intern(text)
                .expect("an empty symbol table has room for the seed symbols");
            interner.kinds.entry(id).or_insert(kind);
        }

        interner
    }

    /// Returns the symbol for `text`, interning it with `kind` if unseen.
    ///
    /// Unseen text with the [`TokenKind::Bogus`] kind is not interned and
    /// yields `Ok(None)`.
    pub fn symbol(
        &mut self,
        text: &str,
        kind: TokenKind,
    ) -> Result<Option<Symbol>, SymbolOverflowError> {
        if let Some(id) = self.table.check_interned(text) {
            return Ok(Some(Symbol(id)));
        }

        if kind == TokenKind::Bogus {
            return Ok(None);
        }

        let id = self.table.intern(text.to_string())?;
        self.kinds.insert(id, kind);

        Ok(Some(Symbol(id)))
    }

    /// Looks `text` up without interning it.
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.table.check_interned(text).map(Symbol)
    }

    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.table.get(symbol.0)
    }

    pub fn kind(&self, symbol: Symbol) -> Option<TokenKind> {
        self.kinds.get(&symbol.0).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
