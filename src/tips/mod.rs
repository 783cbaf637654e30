mod catalog;
mod selector;

pub use selector::{select_tip, select_tip_with, Tip, TipCategory};
