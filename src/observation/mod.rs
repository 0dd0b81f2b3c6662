//----------------------------------------
// observation mod
//----------------------------------------
pub mod types;
