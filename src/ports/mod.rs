//! Ports - interfaces the application layer depends on.
//!
//! Following the onion architecture, ports define the contracts between the
//! application core and the outside world. Infrastructure adapters implement
//! them; use-case handlers only ever see the trait.
//!
//! ## Repository ports
//!
//! - `UserRepository` - read-only user lookup for authentication
//! - `CustomerRepository` - customer write side (create/update/uniqueness)
//! - `CustomerReader` - customer read side (summaries, detail projection)
//! - `ShopRepository` - shop existence checks
//!
//! ## Security ports
//!
//! - `PasswordHasher` - credential hashing and verification
//! - `TokenProvider` - access-token signing and decoding

mod customer_reader;
mod customer_repository;
mod password_hasher;
mod shop_repository;
mod token_provider;
mod user_repository;

pub use customer_reader::{
    ActivitySummaryView, CustomerDetailView, CustomerListFilter, CustomerReader,
    CustomerSummaryView, NoteSummaryView, OpportunityStageView, OpportunitySummaryView,
    RECENT_ITEM_LIMIT,
};
pub use customer_repository::CustomerRepository;
pub use password_hasher::PasswordHasher;
pub use shop_repository::ShopRepository;
pub use token_provider::{TokenClaims, TokenDecodeError, TokenProvider};
pub use user_repository::UserRepository;
