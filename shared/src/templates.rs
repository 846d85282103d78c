//! Tera template registry
//!
//! Apps embed their templates with `include_str!` so the binaries don't
//! depend on the working directory.

use axum::response::Html;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::errors::SharedResult;

/// Cheaply clonable handle to a compiled template set
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Compile a set of `(name, source)` templates. Inheritance between
    /// them is resolved once all sources are registered.
    pub fn from_sources(sources: &[(&str, &str)]) -> SharedResult<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(sources.iter().copied())?;
        Ok(Self { tera: Arc::new(tera) })
    }

    pub fn render(&self, name: &str, context: &Context) -> SharedResult<Html<String>> {
        let html = self.tera.render(name, context)?;
        Ok(Html(html))
    }

    pub fn names(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").field("names", &self.names()).finish()
    }
}
