mod chain;
mod support;
