pub mod cards;
pub mod carousel;
pub mod forms;
pub mod icons;
pub mod sections;

pub use carousel::carousel;
pub use sections::{call_to_action, feature_strip, page_hero, section_header, stats};
