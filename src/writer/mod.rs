pub mod c;
pub mod report;
