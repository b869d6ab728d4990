//! Remote people API: wire types and HTTP client

pub mod client;
pub mod people;

pub use client::PeopleClient;
pub use people::{PeoplePage, Person};
