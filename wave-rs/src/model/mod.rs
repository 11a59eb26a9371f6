mod builder;
mod engine;
mod session;

#[doc(inline)]
pub use builder::StockCoupling;
#[doc(inline)]
pub use builder::WaveModel;
#[doc(inline)]
pub use engine::Objective;
#[doc(inline)]
pub use engine::Sense;
#[doc(inline)]
pub use engine::SolveOutcome;
#[doc(inline)]
pub use engine::SolveParams;
#[doc(inline)]
pub use engine::Solved;
#[doc(inline)]
pub use session::LinearConstraint;
#[doc(inline)]
pub use session::ModelSession;
#[doc(inline)]
pub use session::Probe;
#[doc(inline)]
pub use session::Relation;
