pub mod prepared;
pub use prepared::{Arguments, Bind, Prepared};

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub use quire_core::{stmt, Error, Result};
