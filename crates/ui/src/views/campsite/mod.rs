mod components;
mod form;
pub(crate) mod state;
mod view;

pub use view::CampsiteView;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod form_smoke;
