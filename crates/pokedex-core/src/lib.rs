mod path;

pub use path::{DataPaths, Error, Result, expand_tilde, resolve_data_dir};
