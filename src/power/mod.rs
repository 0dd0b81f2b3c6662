//----------------------------------------
// power mod
//----------------------------------------
pub mod error;
pub mod estimate;
pub mod pmf;
pub mod types;
