pub mod adapters;
pub mod connectivity;
pub mod filter;
pub mod report;
pub mod scaler;
pub mod view;

pub use adapters::*;
pub use connectivity::*;
pub use filter::*;
pub use report::*;
pub use scaler::*;
pub use view::*;
