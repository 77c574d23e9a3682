use std::any::Any;

use crate::config::Config;

/// What a node can see while rendering: the configuration, and optionally
/// a model to bind data from.
///
/// The model is an arbitrary value supplied by the caller at render time.
/// Content that depends on it retrieves it with [`RenderContext::model_as`],
/// which fails softly (returns `None`) when the model is absent or of
/// another type.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a Config,
    model: Option<&'a dyn Any>,
}

impl<'a> RenderContext<'a> {
    /// A context without a model.
    pub fn new(config: &'a Config) -> Self {
        RenderContext {
            config,
            model: None,
        }
    }

    /// A context carrying a model.
    pub fn with_model(config: &'a Config, model: &'a dyn Any) -> Self {
        RenderContext {
            config,
            model: Some(model),
        }
    }

    /// The same configuration, bound to another model.
    ///
    /// Templates use this to hand part of their model to nested content.
    pub fn rebind(&self, model: &'a dyn Any) -> RenderContext<'a> {
        RenderContext::with_model(self.config, model)
    }

    /// The same configuration, without a model.
    pub fn without_model(&self) -> RenderContext<'a> {
        RenderContext::new(self.config)
    }

    /// The active configuration.
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// The model, if any.
    pub fn model(&self) -> Option<&'a dyn Any> {
        self.model
    }

    /// The model, if there is one and it has type `T`.
    pub fn model_as<T: Any>(&self) -> Option<&'a T> {
        self.model?.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("config", self.config)
            .field("has_model", &self.model.is_some())
            .finish()
    }
}

/// Something that can write itself as HTML.
///
/// Implementors provide [`Render::render_model`]; the other methods are
/// conveniences built on it.
pub trait Render {
    /// Append the HTML for this value to `writer`.
    fn render_model(&self, writer: &mut String, context: &RenderContext<'_>);

    /// Render with the process-wide configuration and no model.
    fn render(&self) -> String {
        self.render_with(Config::global())
    }

    /// Render with the given configuration and no model.
    fn render_with(&self, config: &Config) -> String {
        let mut writer = String::new();
        self.render_model(&mut writer, &RenderContext::new(config));
        writer
    }

    /// Render with the process-wide configuration, binding `model`.
    fn render_with_model(&self, model: &dyn Any) -> String {
        let mut writer = String::new();
        self.render_model(
            &mut writer,
            &RenderContext::with_model(Config::global(), model),
        );
        writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting;

    impl Render for Greeting {
        fn render_model(&self, writer: &mut String, context: &RenderContext<'_>) {
            match context.model_as::<String>() {
                Some(name) => {
                    writer.push_str("Hello ");
                    writer.push_str(name);
                }
                None => writer.push_str("Hello stranger"),
            }
        }
    }

    #[test]
    fn test_model_downcast() {
        assert_eq!(Greeting.render(), "Hello stranger");
        assert_eq!(
            Greeting.render_with_model(&"Alice".to_string()),
            "Hello Alice"
        );
        // wrong model type is treated like no model
        assert_eq!(Greeting.render_with_model(&42u32), "Hello stranger");
    }

    #[test]
    fn test_rebind() {
        let config = Config::default();
        let outer = 1u8;
        let inner = "inner".to_string();
        let context = RenderContext::with_model(&config, &outer);
        let rebound = context.rebind(&inner);
        assert_eq!(rebound.model_as::<String>(), Some(&inner));
        assert!(rebound.model_as::<u8>().is_none());
        assert!(context.without_model().model().is_none());
    }
}
