// ============================================================
// SOURCE INFRASTRUCTURE LAYER
// ============================================================
// Tree walking and JSON document loading

mod enumerator;
mod loader;

pub use enumerator::SourceEnumerator;
pub use loader::DocumentLoader;
