pub mod cards;
pub mod charts;
pub mod map;
pub mod popup;
pub mod tables;
