mod apex_synthesizer;
mod resolution_engine;
mod resource_registry;

pub use apex_synthesizer::ApexSynthesizer;
pub use resolution_engine::ResolutionEngine;
pub use resource_registry::{ResourceRegistry, ResourceSource};
