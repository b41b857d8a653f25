pub mod carousel;
pub mod core;
pub mod gemini;
pub mod gui;
