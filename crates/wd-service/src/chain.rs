//! Service decorator composition.
//!
//! A decorator takes ownership of the next service in the chain and returns
//! a new service wrapping it. `compose` applies a list of decorators over a
//! base implementation: the first entry ends up innermost, the last entry
//! outermost and therefore first to see every call.

use std::sync::Arc;

/// One layer in a service decorator chain.
pub type Decorator<S> = Box<dyn FnOnce(Arc<S>) -> Arc<S> + Send>;

/// Wrap `base` in every decorator, in order.
pub fn compose<S: ?Sized>(base: Arc<S>, decorators: Vec<Decorator<S>>) -> Arc<S> {
    decorators
        .into_iter()
        .fold(base, |next, decorate| decorate(next))
}
