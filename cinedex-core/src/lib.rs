//! Lazy data-access client for the IMDb graph API and web pages.
//!
//! A [`Cinedex`] client hands out per-entity resolvers: [`Person`] reads
//! the graph API, [`Title`] scrapes the public pages. Every accessor
//! fetches on first use and memoizes for the lifetime of the resolver,
//! so repeated reads cost nothing and unrelated attributes are never
//! fetched at all.
//!
//! ```no_run
//! # async fn demo() -> cinedex_core::Result<()> {
//! use cinedex_model::NameId;
//!
//! let client = cinedex_core::Cinedex::new()?;
//! let person = client.person(NameId::new("nm0000210")?);
//! println!("{}", person.name().await?);
//! # Ok(())
//! # }
//! ```
#![allow(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod pages;
pub mod person;
pub mod title;

pub use client::Cinedex;
pub use config::Config;
pub use error::{CinedexError, Result};
pub use graph::{Connection, Edge, GraphClient, PageInfo};
pub use pages::{PageClient, TitlePage};
pub use person::{Person, PhotoSize};
pub use title::Title;
