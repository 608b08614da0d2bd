use crate::chain::{Decorator, compose};

use std::sync::Arc;

use async_trait::async_trait;
use googletest::prelude::*;

#[async_trait]
trait Probe: Send + Sync {
    async fn trace(&self) -> Vec<&'static str>;
}

struct Base;

#[async_trait]
impl Probe for Base {
    async fn trace(&self) -> Vec<&'static str> {
        vec!["base"]
    }
}

struct Layer {
    tag: &'static str,
    next: Arc<dyn Probe>,
}

#[async_trait]
impl Probe for Layer {
    async fn trace(&self) -> Vec<&'static str> {
        let mut order = vec![self.tag];
        order.extend(self.next.trace().await);
        order
    }
}

fn layer(tag: &'static str) -> Decorator<dyn Probe> {
    Box::new(move |next| Arc::new(Layer { tag, next }) as Arc<dyn Probe>)
}

#[tokio::test]
async fn given_decorators_when_composed_then_last_entry_is_outermost() {
    let base: Arc<dyn Probe> = Arc::new(Base);

    let chained = compose(base, vec![layer("logging"), layer("caching"), layer("validation")]);

    assert_that!(
        chained.trace().await,
        eq(&vec!["validation", "caching", "logging", "base"])
    );
}

#[tokio::test]
async fn given_no_decorators_when_composed_then_base_is_returned() {
    let base: Arc<dyn Probe> = Arc::new(Base);

    let chained = compose(base, Vec::new());

    assert_that!(chained.trace().await, eq(&vec!["base"]));
}
