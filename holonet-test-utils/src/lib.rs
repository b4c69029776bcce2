pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
