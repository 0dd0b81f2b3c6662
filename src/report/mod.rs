//----------------------------------------
// report mod
//----------------------------------------
pub mod table;
pub mod tables;
