use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate that is also its path key in the REST API.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs and tables
    fn as_string(&self) -> String;

    /// Parse an id typed by a user or read from a spreadsheet cell
    fn from_string(s: &str) -> Result<Self, String>;
}
