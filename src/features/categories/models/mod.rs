mod category;

pub use category::{color_of, label_of, Category, UnknownCategory};
