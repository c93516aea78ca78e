#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod rough;
pub mod state;
pub mod text;

pub use app::SketchApp;
pub use config::BoardConfig;
pub use document::Document;
pub use editor::Editor;
pub use element::{Element, Shape, ShapeTool};
pub use error::{BoardError, ConfigError};
pub use geometry::{Position, Tolerance};
pub use renderer::{Renderer, Surface};
pub use state::{Action, Selection, TextEntry, Tool};
pub use text::TextMeasure;
