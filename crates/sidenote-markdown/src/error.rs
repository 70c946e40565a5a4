//! Plugin registration errors.

/// Error returned when a plugin cannot be registered.
///
/// The engine is left unchanged by a failed registration.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// A plugin with the same name is already registered.
    #[error("plugin '{0}' is already registered")]
    DuplicatePlugin(String),
    /// The plugin descriptor is unusable.
    #[error("malformed plugin: {0}")]
    MalformedPlugin(String),
    /// Configuration names a plugin that is not built in.
    #[error("unknown plugin '{0}'")]
    UnknownPlugin(String),
}
