//! Target registry: target name to renderer.

use crate::targets::{ArduinoSketch, DevListing, MrubyScript};
use rossoc_parser::Ir;
use std::collections::BTreeMap;

/// Turns an [`Ir`] into a complete program for one target.
pub trait Renderer: Send + Sync {
    /// Name used in the query's FROM clause.
    fn name(&self) -> &str;

    /// Conventional extension for generated files, without the dot.
    fn file_extension(&self) -> &str;

    fn render(&self, ir: &Ir) -> String;
}

pub struct TargetRegistry {
    renderers: BTreeMap<String, Box<dyn Renderer>>,
}

impl TargetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    fn register_builtins(&mut self) {
        self.register(ArduinoSketch::new("arduino"));
        self.register(ArduinoSketch::new("board"));
        self.register(MrubyScript);
        self.register(DevListing);
    }

    /// Add a renderer under its own name, replacing any previous one.
    pub fn register(&mut self, renderer: impl Renderer + 'static) {
        tracing::trace!(target_name = renderer.name(), "registered renderer");
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn target_names(&self) -> Vec<&str> {
        self.renderers.keys().map(String::as_str).collect()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
