//! Template registry.
//!
//! A template is a static record: a name, a one-line description, an
//! indented Python code body with `{NAME}` placeholders, and a function that
//! draws values for those placeholders from a random generator.

mod builtin;

pub use builtin::builtin_templates;

use rand::RngCore;
use serde::Serialize;
use std::fmt;

use crate::error::RenderError;
use crate::params::Params;
use crate::render;

/// Draws placeholder values for a template.
pub type ParamGenerator = fn(&mut dyn RngCore) -> Params;

/// A named, parameterized code skeleton.
#[derive(Clone, Copy, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    /// Code body, stored indented; de-indented before substitution.
    #[serde(skip)]
    pub code: &'static str,
    #[serde(skip)]
    pub params: ParamGenerator,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Template {
    /// Human-readable title: `merge_sort` becomes `Merge Sort`.
    pub fn title(&self) -> String {
        self.name
            .split(|c: char| c == '_' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Filesystem-safe form of the name.
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    /// Placeholder names referenced by the code body, in order of first use.
    pub fn placeholders(&self) -> Result<Vec<String>, RenderError> {
        render::placeholders(&render::dedent(self.code))
    }

    /// Draw a fresh set of parameters from `rng`.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Params {
        (self.params)(rng)
    }
}

/// Lowercase `name` and collapse every run of characters outside
/// `[a-z0-9_]` into a single underscore.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('_');
            in_run = true;
        }
    }
    slug
}

/// Fixed list of templates available for selection.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Registry over an explicit template list.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Registry holding the built-in templates.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Find a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.name).collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::rng_for_seed;

    #[test]
    fn test_title_case() {
        let registry = TemplateRegistry::builtin();
        let fib = registry.get("fibonacci_iterative").unwrap();
        assert_eq!(fib.title(), "Fibonacci Iterative");
        let sieve = registry.get("sieve_of_eratosthenes").unwrap();
        assert_eq!(sieve.title(), "Sieve Of Eratosthenes");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("merge_sort"), "merge_sort");
        assert_eq!(slugify("Dijkstra on Grid!"), "dijkstra_on_grid_");
        assert_eq!(slugify("A--B  c"), "a_b_c");
        assert_eq!(slugify("Ünïcode"), "_n_code");
    }

    #[test]
    fn test_builtin_names_are_unique_and_already_slugs() {
        let registry = TemplateRegistry::builtin();
        let mut names = registry.names();
        for name in &names {
            assert_eq!(&slugify(name), name);
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.get("bogosort").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = TemplateRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_generators_cover_every_placeholder() {
        let registry = TemplateRegistry::builtin();
        for seed in [0_u64, 1, 20240101, 20251231, u64::MAX] {
            let mut rng = rng_for_seed(seed);
            for template in registry.templates() {
                let params = template.generate(&mut rng);
                let placeholders = template.placeholders().unwrap();
                assert!(!placeholders.is_empty(), "{} has no placeholders", template.name);
                for name in &placeholders {
                    assert!(
                        params.contains_key(name),
                        "{} generator is missing '{}'",
                        template.name,
                        name
                    );
                }
                assert_eq!(params.len(), placeholders.len(), "{}", template.name);
            }
        }
    }
}
