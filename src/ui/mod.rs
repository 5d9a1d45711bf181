mod counter_widget;
pub mod layout;

pub use counter_widget::{CounterView, CounterWidget};
pub use layout::CounterLayout;
