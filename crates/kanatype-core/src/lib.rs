pub mod dict;
pub mod generator;
pub mod romaji;
pub mod unicode;
