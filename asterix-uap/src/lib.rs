//! # asterix-uap
//!
//! User Application Profile data tables (C8) for the categories this
//! workspace decodes. A UAP is built once from plain Rust data -- never from
//! code generation or runtime XML parsing -- and is consulted purely by FRN
//! lookup; adding a new category is a matter of writing one more builder
//! function and registering it.
//!
//! CAT021 is a complete port of the published v2.5 FRN table (49 entries).
//! CAT034 and CAT048 are intentionally partial: enough entries to exercise
//! every structural kind, not the full standard.

pub mod cat021;
pub mod cat034;
pub mod cat048;
pub mod registry;

pub use cat021::cat021;
pub use cat034::cat034;
pub use cat048::cat048;
pub use registry::UapRegistry;
