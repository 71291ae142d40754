mod aggregation;
mod check_state;
mod list;

pub mod units;

pub use aggregation::*;
pub use check_state::*;
pub use list::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}
