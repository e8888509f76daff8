// Shared string and date helpers used by the normalizers and the query engine

pub mod dates;
pub mod text;
