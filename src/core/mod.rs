pub mod logging;
pub mod name_data;
