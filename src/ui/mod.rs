pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;
