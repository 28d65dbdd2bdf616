mod assets_tests;
mod forms_tests;
mod pages_tests;
mod properties_tests;
