//! Book and catalog models.

mod book;
mod catalog;

pub use book::{Book, BookStatus, Chapter, Price};
pub use catalog::{BookFilter, Catalog, SortBy};
