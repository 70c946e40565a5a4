//! Engine facade: plugin registry plus parse/render entry points.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use sidenote_config::Config;

use crate::error::PluginError;
use crate::plugin::SyntaxPlugin;
use crate::render::{self, RenderInput};
use crate::syntax;
use crate::text::{self, DEFAULT_PREVIEW_LENGTH};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// Markdown engine built from registered syntax plugins.
///
/// Register plugins once, then call [`process`](Self::process) (or
/// [`parse`](Self::parse) and [`render`](Self::render)) as often as needed.
/// Parsing and rendering take `&self`, so an engine can be shared between
/// threads once set up.
///
/// # Example
///
/// ```
/// use sidenote_markdown::MarkdownEngine;
/// use sidenote_markdown::syntax::{BoldPlugin, HeadingPlugin};
///
/// let mut engine = MarkdownEngine::new();
/// engine.register(HeadingPlugin)?.register(BoldPlugin)?;
///
/// let html = engine.process("## Notes\n**todo**");
/// assert!(html.starts_with(r#"<div class="md-h2">"#));
/// assert!(html.contains(r#"<span class="md-bold">"#));
/// # Ok::<(), sidenote_markdown::PluginError>(())
/// ```
pub struct MarkdownEngine {
    plugins: Vec<Box<dyn SyntaxPlugin>>,
    by_name: HashMap<String, usize>,
    /// Indices into `plugins`, descending priority. Reset on registration.
    sorted: OnceLock<Vec<usize>>,
    preview_length: usize,
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MarkdownEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownEngine")
            .field("plugins", &self.plugin_names())
            .field("preview_length", &self.preview_length)
            .finish()
    }
}

impl MarkdownEngine {
    /// Create an engine with no plugins.
    ///
    /// Without plugins every line renders as escaped text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            by_name: HashMap::new(),
            sorted: OnceLock::new(),
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }

    /// Create an engine with every built-in plugin registered.
    #[must_use]
    pub fn with_default_plugins() -> Self {
        let mut engine = Self::new();
        // Built-in names are distinct and non-empty.
        for plugin in syntax::default_plugins() {
            engine.insert(plugin);
        }
        engine
    }

    /// Create an engine from configuration.
    ///
    /// Registers the built-ins selected by `[engine] plugins` (all of them
    /// when unset) minus `[engine] disabled`, and takes the preview length
    /// from `[preview] max_length`.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::UnknownPlugin`] if either list names a plugin
    /// that is not built in.
    pub fn from_config(config: &Config) -> Result<Self, PluginError> {
        let engine_config = &config.engine;
        for name in engine_config.plugins.iter().flatten().chain(&engine_config.disabled) {
            if !syntax::BUILTIN_NAMES.contains(&name.as_str()) {
                return Err(PluginError::UnknownPlugin(name.clone()));
            }
        }

        let mut engine = Self::new().with_preview_length(config.preview.max_length);
        for name in syntax::BUILTIN_NAMES {
            if !engine_config.is_enabled(name) {
                continue;
            }
            if let Some(plugin) = syntax::builtin(name) {
                engine.register_boxed(plugin)?;
            }
        }
        Ok(engine)
    }

    /// Set the preview length used by [`preview`](Self::preview).
    #[must_use]
    pub fn with_preview_length(mut self, max_length: usize) -> Self {
        self.preview_length = max_length;
        self
    }

    /// Register a plugin.
    ///
    /// Returns `&mut Self` so registrations can be chained with `?`.
    ///
    /// # Errors
    ///
    /// - [`PluginError::MalformedPlugin`] if the plugin name is blank
    /// - [`PluginError::DuplicatePlugin`] if the name is already registered
    ///
    /// The engine is unchanged on error.
    #[doc(alias = "use")]
    pub fn register<P: SyntaxPlugin + 'static>(
        &mut self,
        plugin: P,
    ) -> Result<&mut Self, PluginError> {
        self.register_boxed(Box::new(plugin))
    }

    /// Register an already boxed plugin.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_boxed(
        &mut self,
        plugin: Box<dyn SyntaxPlugin>,
    ) -> Result<&mut Self, PluginError> {
        let name = plugin.name().to_owned();
        if name.trim().is_empty() {
            return Err(PluginError::MalformedPlugin(
                "plugin name cannot be empty".to_owned(),
            ));
        }
        if self.by_name.contains_key(&name) {
            tracing::warn!(plugin = %name, "Plugin already registered");
            return Err(PluginError::DuplicatePlugin(name));
        }

        self.insert(plugin);
        Ok(self)
    }

    /// Add a plugin whose name is known to be valid and unused.
    fn insert(&mut self, plugin: Box<dyn SyntaxPlugin>) {
        tracing::debug!(
            plugin = plugin.name(),
            kind = ?plugin.kind(),
            priority = plugin.priority(),
            "Registered plugin"
        );
        self.by_name.insert(plugin.name().to_owned(), self.plugins.len());
        self.plugins.push(plugin);
        self.sorted.take();
    }

    /// Register several plugins in order.
    ///
    /// Stops at the first failure; plugins registered before it stay.
    ///
    /// # Errors
    ///
    /// The first error returned by [`register`](Self::register).
    #[doc(alias = "useAll")]
    pub fn register_all<I>(&mut self, plugins: I) -> Result<&mut Self, PluginError>
    where
        I: IntoIterator<Item = Box<dyn SyntaxPlugin>>,
    {
        for plugin in plugins {
            self.register_boxed(plugin)?;
        }
        Ok(self)
    }

    /// Whether a plugin named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up a registered plugin by name.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&dyn SyntaxPlugin> {
        self.by_name.get(name).map(|&i| self.plugins[i].as_ref())
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugin names in dispatch order (descending priority).
    #[must_use]
    pub fn plugin_names(&self) -> Vec<&str> {
        self.sorted_plugins().map(SyntaxPlugin::name).collect()
    }

    /// Tokenize markdown text.
    ///
    /// Never fails: anything no plugin recognizes becomes a `text` token.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<Token> {
        Tokenizer::new(self.sorted_plugins()).tokenize(text)
    }

    /// Render tokens, or raw text, to HTML.
    ///
    /// Raw text is parsed first.
    ///
    /// ```
    /// use sidenote_markdown::{MarkdownEngine, Token};
    ///
    /// let engine = MarkdownEngine::new();
    /// assert_eq!(engine.render(&[Token::text("a < b")]), "a &lt; b");
    /// assert_eq!(engine.render("a < b"), "a &lt; b");
    /// ```
    #[must_use]
    pub fn render<'a>(&self, input: impl Into<RenderInput<'a>>) -> String {
        match input.into() {
            RenderInput::Tokens(tokens) => render::render_tokens(self.sorted_plugins(), tokens),
            RenderInput::Text(text) => self.process(text),
        }
    }

    /// Parse and render in one step.
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        let tokens = self.parse(text);
        render::render_tokens(self.sorted_plugins(), &tokens)
    }

    /// Plain-text preview using the engine's preview length.
    #[must_use]
    pub fn preview(&self, text: &str) -> String {
        text::preview(text, self.preview_length)
    }

    fn sorted_plugins(&self) -> impl Iterator<Item = &dyn SyntaxPlugin> + Clone {
        let order = self.sorted.get_or_init(|| {
            let mut order: Vec<usize> = (0..self.plugins.len()).collect();
            order.sort_by_key(|&i| Reverse(self.plugins[i].priority()));
            order
        });
        let plugins = &self.plugins;
        order.iter().map(move |&i| -> &dyn SyntaxPlugin { plugins[i].as_ref() })
    }
}
