pub mod engine;
pub mod mpv;
pub mod poller;
pub mod surface;
pub mod switcher;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod switcher_test;

pub use engine::*;
pub use mpv::*;
pub use poller::*;
pub use surface::*;
pub use switcher::*;
pub use transport::*;
