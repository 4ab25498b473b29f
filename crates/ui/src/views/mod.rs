mod campsite;
mod directory;
mod state;


pub use campsite::CampsiteView;
pub use directory::DirectoryView;
pub use state::{ViewError, ViewState, view_state_from_resource};
