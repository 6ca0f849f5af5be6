//! Client for reading Hacker News stories, comment threads, and search
//! results through the Algolia search API.
//!
//! ```no_run
//! use hn_algolia::{CancellationToken, Client, SearchRequest};
//!
//! # async fn example() -> Result<(), hn_algolia::Error> {
//! let client = Client::new();
//! let cancel = CancellationToken::new();
//!
//! let stories = client.front_page(&cancel).await?;
//!
//! let popular = client
//!   .search_recent(&SearchRequest::new().points("> 500"), &cancel)
//!   .await?;
//!
//! let thread = client.find(stories[0].id, &cancel).await?;
//! # let _ = (popular, thread);
//! # Ok(())
//! # }
//! ```

use {
  anyhow::Context,
  arguments::Arguments,
  chrono::{DateTime, Utc},
  clap::Parser,
  crossterm::style::Stylize,
  item_payload::ItemPayload,
  search_response::SearchResponse,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal},
    num::ParseIntError,
    process,
    time::Duration,
  },
  subcommand::{Output, Subcommand},
  text::{count, paragraphs, truncate, wrap},
  tracing::{debug, trace},
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  url::form_urlencoded,
  utils::{deserialize_null_default, deserialize_optional_id},
};

pub use {
  client::Client,
  config::ClientConfig,
  error::Error,
  item::Item,
  item_kind::ItemKind,
  listing::{Endpoint, Listing},
  run::run,
  search_hit::{Highlight, Highlights, SearchHit},
  search_request::SearchRequest,
  search_result::SearchResult,
  tokio_util::sync::CancellationToken,
  transport::{RawResponse, Transport},
};

mod arguments;
mod client;
mod comment_thread;
mod config;
mod error;
mod item;
mod item_kind;
mod item_payload;
mod listing;
mod render;
mod run;
mod search_hit;
mod search_request;
mod search_response;
mod search_result;
mod subcommand;
mod text;
mod transport;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
