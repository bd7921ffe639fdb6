pub mod macro_string_concatenation;

pub use macro_string_concatenation::MacroStringConcatenation;
