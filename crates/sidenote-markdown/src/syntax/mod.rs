//! Built-in syntax plugins.
//!
//! | Plugin | Kind | Priority | Token types |
//! |---|---|---|---|
//! | [`HeadingPlugin`] | block | 100 | `heading` |
//! | [`CodeBlockPlugin`] | block | 90 | `codeBlock` |
//! | [`BlockquotePlugin`] | block | 80 | `blockquote` |
//! | [`ListPlugin`] | block | 70 | `orderedList`, `unorderedList` |
//! | [`HorizontalRulePlugin`] | block | 60 | `hr` |
//! | [`LinkPlugin`] | inline | 50 | `link` |
//! | [`InlineCodePlugin`] | inline | 40 | `inlineCode` |
//! | [`BoldPlugin`] | inline | 30 | `bold` |
//! | [`ItalicPlugin`] | inline | 20 | `italic` |

mod code;
mod emphasis;
mod heading;
mod link;
mod list;
mod quote;

use crate::plugin::SyntaxPlugin;

pub use code::{CodeBlockPlugin, InlineCodePlugin};
pub use emphasis::{BoldPlugin, ItalicPlugin};
pub use heading::HeadingPlugin;
pub use link::LinkPlugin;
pub use list::{BULLET, ListPlugin};
pub use quote::{BlockquotePlugin, HorizontalRulePlugin};

/// Names of the built-in plugins, in default registration order.
pub const BUILTIN_NAMES: &[&str] = &[
    "heading",
    "codeBlock",
    "blockquote",
    "list",
    "hr",
    "link",
    "inlineCode",
    "bold",
    "italic",
];

/// Construct a built-in plugin by name.
///
/// # Example
///
/// ```
/// use sidenote_markdown::syntax;
///
/// assert_eq!(syntax::builtin("bold").unwrap().name(), "bold");
/// assert!(syntax::builtin("table").is_none());
/// ```
pub fn builtin(name: &str) -> Option<Box<dyn SyntaxPlugin>> {
    let plugin: Box<dyn SyntaxPlugin> = match name {
        "heading" => Box::new(HeadingPlugin),
        "codeBlock" => Box::new(CodeBlockPlugin),
        "blockquote" => Box::new(BlockquotePlugin),
        "list" => Box::new(ListPlugin),
        "hr" => Box::new(HorizontalRulePlugin),
        "link" => Box::new(LinkPlugin),
        "inlineCode" => Box::new(InlineCodePlugin),
        "bold" => Box::new(BoldPlugin),
        "italic" => Box::new(ItalicPlugin),
        _ => return None,
    };
    Some(plugin)
}

/// The full built-in plugin set.
pub fn default_plugins() -> Vec<Box<dyn SyntaxPlugin>> {
    BUILTIN_NAMES.iter().filter_map(|name| builtin(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_name_resolves() {
        for name in BUILTIN_NAMES {
            let plugin = builtin(name).unwrap();
            assert_eq!(plugin.name(), *name);
        }
    }

    #[test]
    fn test_default_plugins_complete() {
        let names: Vec<String> = default_plugins()
            .iter()
            .map(|p| p.name().to_owned())
            .collect();
        assert_eq!(names, BUILTIN_NAMES);
    }
}
