pub mod path_ext;
pub mod str_ext;
