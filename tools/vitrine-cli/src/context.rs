//! Shared command context: output, cart location, and client construction.

use crate::output::Output;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use vitrine_commerce::cart::{CartStore, ChannelSink, JsonFileStorage, Notification};
use vitrine_storefront::CatalogClient;

const DEFAULT_CART_DIR: &str = ".vitrine";

/// Context shared by every command.
pub struct Context {
    /// Output handler.
    pub output: Output,
    cart_dir: PathBuf,
}

impl Context {
    /// Create the context; the cart lives under `cart_dir` (default
    /// `.vitrine/` in the working directory).
    pub fn new(cart_dir: Option<PathBuf>, output: Output) -> Self {
        Self {
            output,
            cart_dir: cart_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CART_DIR)),
        }
    }

    /// A catalog client reading its configuration per request.
    pub fn catalog(&self) -> Result<CatalogClient> {
        CatalogClient::from_env().context("could not construct the catalog client")
    }

    /// Open the persisted cart, returning the store and the notification
    /// channel to drain after mutations.
    pub fn open_cart(&self) -> (CartStore, Receiver<Notification>) {
        let (sink, receiver) = ChannelSink::new();
        let store = CartStore::open(
            Box::new(JsonFileStorage::new(&self.cart_dir)),
            Box::new(sink),
        );
        self.output
            .debug(&format!("cart slot: {}", self.cart_dir.display()));
        (store, receiver)
    }

    /// Print every notification the cart emitted during this command.
    pub fn drain_toasts(&self, receiver: &Receiver<Notification>) {
        while let Ok(notification) = receiver.try_recv() {
            self.output.toast(&notification);
        }
    }
}
