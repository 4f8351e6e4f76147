//! Typed resources and wire enumerations of the partner API.
//!
//! Every resource is declared once with its wire field names, decoding kinds, and presence rules;
//! the declaration yields the struct, its static [`Schema`](crate::codec::Schema), and the
//! conversions the codec needs.

pub mod company;
pub mod enums;
pub mod invoice;
pub mod order;
pub mod page;
pub mod product;
pub mod subscription;
pub mod usage;

pub use company::*;
pub use enums::*;
pub use invoice::*;
pub use order::*;
pub use page::*;
pub use product::*;
pub use subscription::*;
pub use usage::*;
