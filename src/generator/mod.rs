//----------------------------------------
// generator mod
//----------------------------------------
pub mod error;
pub mod generate;
pub mod presets;
pub mod types;
