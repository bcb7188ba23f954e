use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the pipeline.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences routing behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an environment which discards all messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg: &str| println!("{msg}")) }
    }
}
