//! Output formatter trait

use switchboard_application::RoutedAnswer;

/// Trait for rendering a routed answer
pub trait OutputFormatter: Send + Sync {
    /// Render one answer; the result carries no trailing newline
    fn format(&self, routed: &RoutedAnswer) -> String;
}
