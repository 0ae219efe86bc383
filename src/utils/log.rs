// src/utils/log.rs

//! Logging for the codec.
//!
//! Library code logs through the `log` facade (`trace!` for per-merge and
//! per-symbol detail, `debug!` for per-operation summaries). Nothing is printed
//! unless the embedding program installs a logger. Programs and tests that just
//! want to see the output can call [`init_subscriber`], which installs a
//! `tracing-subscriber` formatter that also picks up `log` records:
//!
//! ```
//! use huffman_codec::utils::log::{init_subscriber, LevelFilter};
//!
//! init_subscriber(LevelFilter::Debug);
//! let freq = huffman_codec::count("abracadabra");
//! let tree = huffman_codec::build_tree(&freq).unwrap();
//! assert_eq!(tree.weight(), 11);
//! ```

pub use log::{debug, error, info, trace, warn, LevelFilter};
use tracing_subscriber::filter::LevelFilter as SubscriberLevel;

/// Installs a global subscriber that writes log records to standard error.
///
/// Returns `false` if a global subscriber or logger was already installed,
/// in which case the existing one is left untouched.
pub fn init_subscriber(max_level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(subscriber_level(max_level))
        .with_thread_ids(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

fn subscriber_level(level: LevelFilter) -> SubscriberLevel {
    match level {
        LevelFilter::Off => SubscriberLevel::OFF,
        LevelFilter::Error => SubscriberLevel::ERROR,
        LevelFilter::Warn => SubscriberLevel::WARN,
        LevelFilter::Info => SubscriberLevel::INFO,
        LevelFilter::Debug => SubscriberLevel::DEBUG,
        LevelFilter::Trace => SubscriberLevel::TRACE,
    }
}
