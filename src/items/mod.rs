mod line;

pub use line::LineItem;
