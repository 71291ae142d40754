mod cache;
mod calendar;
mod horizon;

pub use cache::*;
pub use calendar::*;
pub use horizon::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod service;

        pub use command::*;
        pub use service::*;
    }
}
