//! Navigation port trait

/// Fire-and-forget navigation request; no result is consumed.
pub trait Navigator: Send + Sync {
    /// Navigate the surrounding shell to an app-relative path
    fn navigate_to(&self, path: &str);
}
