//! Progress display while a reply is outstanding

pub mod reporter;
