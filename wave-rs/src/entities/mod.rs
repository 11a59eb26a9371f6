mod aisle;
mod assignment;
mod instance;
mod item_qtys;
mod order;
mod ratio;
mod solution;

#[doc(inline)]
pub use aisle::Aisle;
#[doc(inline)]
pub use assignment::Assignment;
#[doc(inline)]
pub use assignment::SELECTION_THRESHOLD;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item_qtys::ItemQtys;
#[doc(inline)]
pub use order::Order;
#[doc(inline)]
pub use ratio::Ratio;
#[doc(inline)]
pub use ratio::candidate_ratios;
#[doc(inline)]
pub use solution::WaveSolution;
