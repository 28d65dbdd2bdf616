pub mod about;
pub mod contact;
pub mod error;
pub mod home;
pub mod properties;
pub mod property_details;
pub mod services;
pub mod thanks;

pub use about::about_page;
pub use contact::contact_page;
pub use error::error_page;
pub use home::home_page;
pub use properties::properties_page;
pub use property_details::property_details_page;
pub use services::services_page;
pub use thanks::thanks_page;
