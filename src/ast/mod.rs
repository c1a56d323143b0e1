/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node enum, its kind tags and query methods
/// - printer: Indented tree rendering used for debugging and golden tests
pub mod ast;
pub mod printer;
