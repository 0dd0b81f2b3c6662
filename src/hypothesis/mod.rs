//----------------------------------------
// hypothesis mod
//----------------------------------------
pub mod compare;
pub mod error;
pub mod mann_whitney;
pub(crate) mod rank;
pub(crate) mod std_normal;
pub mod types;
