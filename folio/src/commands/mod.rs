pub mod serve;
pub mod sheet;
