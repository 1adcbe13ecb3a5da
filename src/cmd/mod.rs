pub mod advise;
pub mod chart;
pub mod notation;
