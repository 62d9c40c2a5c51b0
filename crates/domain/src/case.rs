//! Case inputs: the dictionary a user script or document describes, and the
//! input file it was loaded from.

pub mod dictionary;
pub mod format;
pub mod input_file;

pub use dictionary::CaseDictionary;
pub use format::CaseFormat;
pub use input_file::InputFile;
