/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Reading and writing the plain-text challenge format
pub mod parser;

mod export;
mod import;

/// Exports a wave out of the library.
pub use export::export;

/// Imports an instance into the library.
pub use import::import;
