//! Business logic services module.

pub mod balance;
pub mod name_resolver;

pub use balance::{AccountRef, BalanceService};
pub use name_resolver::{NameResolver, NameResolverTrait, NameTablesDocument};
