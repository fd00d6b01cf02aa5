use super::{BinaryFn, Function, UnaryFn};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Static registry mapping canonical names to functions
static REGISTRY: OnceLock<FxHashMap<&'static str, Function>> = OnceLock::new();

/// Initialize the registry with every unary and binary name
fn init_registry() -> FxHashMap<&'static str, Function> {
    let mut map = FxHashMap::default();
    map.reserve(UnaryFn::ALL.len() + BinaryFn::ALL.len());

    for f in UnaryFn::ALL {
        map.insert(f.name(), Function::Unary(f));
    }
    for f in BinaryFn::ALL {
        map.insert(f.name(), Function::Binary(f));
    }

    map
}

/// Central registry for name lookups
pub(crate) struct Registry;

impl Registry {
    /// Get a function by canonical name
    pub(crate) fn get(name: &str) -> Option<Function> {
        REGISTRY.get_or_init(init_registry).get(name).copied()
    }
}
