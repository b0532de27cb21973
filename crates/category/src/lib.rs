//! Category domain module.
//!
//! Business rules for catalog categories, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod category;

pub use category::{
    Category, CategoryCreateCommand, CategoryJson, CategoryProps, CategoryValidator, NAME_MAX_CHARS,
};
