//! # pay-supabase
//!
//! Supabase Auth identity provider for the order intake service.
//!
//! ```rust,ignore
//! use pay_supabase::SupabaseIdentity;
//! use pay_core::IdentityProvider;
//!
//! let identity = SupabaseIdentity::from_env()?;
//! let user = identity.get_user("Bearer eyJ...").await?;
//! ```

pub mod auth;
pub mod config;

pub use auth::SupabaseIdentity;
pub use config::SupabaseConfig;
