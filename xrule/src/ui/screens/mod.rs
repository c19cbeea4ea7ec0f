pub mod calculator_screen;
