pub mod catalog;
pub mod data;
pub mod types;

pub use catalog::{
    all_categories, category_info, draw_random, get_category, load_category_from_file,
    CatalogError,
};
pub use types::{CategoryInfo, QuizCategory, QuizItem};
