//! Lexically nested symbol bindings.
//!
//! A [`ScopeManager`](scope_manager::ScopeManager) is keyed by the same
//! symbols the interner hands out, so an analysis pass can bind the `Id`
//! nodes of a tree directly.

pub mod scope_manager;

#[cfg(test)]
mod tests;
