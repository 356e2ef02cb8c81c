//! Cooperative timer capability supplied by the host.
//!
//! The browser front-end backs this with `setTimeout`/`setInterval`; tests use
//! a virtual clock. All delays are in milliseconds.

use std::future::Future;
use std::pin::Pin;

pub type LocalBoxFuture = Pin<Box<dyn Future<Output = ()>>>;

pub trait Timer {
    /// Future that resolves once `ms` have elapsed.
    fn sleep(&self, ms: u32) -> LocalBoxFuture;

    /// Run `task` once after `ms`. Never runs synchronously.
    fn defer(&self, ms: u32, task: Box<dyn FnOnce()>);

    /// Run `task` every `ms` for the rest of the page's lifetime.
    fn every(&self, ms: u32, task: Box<dyn FnMut()>);
}
