pub mod contractor_form_screen;

pub use contractor_form_screen::ContractorFormScreen;
