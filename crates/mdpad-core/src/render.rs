//! Document rendering abstraction.

/// Turns document source into display output.
///
/// Called synchronously on every edit, so implementations should be cheap
/// and infallible.
pub trait Renderer: Send + Sync {
    fn render(&self, content: &str) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, content: &str) -> String {
        self(content)
    }
}
