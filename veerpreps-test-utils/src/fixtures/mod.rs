//! JSON bodies served by the mock backend.

pub mod backend;
