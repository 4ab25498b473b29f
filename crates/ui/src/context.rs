use std::sync::Arc;

use services::DirectoryService;

/// The capabilities the UI needs from its host application.
///
/// Implemented by the desktop binary and by test harnesses; views only ever
/// see the resulting `AppContext`.
pub trait UiApp: Send + Sync {
    fn directory(&self) -> Arc<DirectoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    directory: Arc<DirectoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            directory: app.directory(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}
