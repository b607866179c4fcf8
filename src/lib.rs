//! Climate Scenes - annotated climate line charts from CSV
//!
//! Three fixed scenes (temperature, CO2, ice extent), each a CSV file rendered
//! as a line chart with two callouts. Rendering is a pure function from data
//! to drawing primitives; the GUI and the SVG/PNG exporter paint those.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod scene;
