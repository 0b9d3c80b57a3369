//! Service test support.


pub(crate) use context::TestContext;
