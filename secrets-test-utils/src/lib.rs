pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        test_setup_with_tables, test_setup_with_user_tables, TestBuilder, TestContext, TestError,
    };
}

/// Creates a [`TestContext`] with the given entity tables, or no tables at all.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Creates a [`TestContext`] with the user table, plus any additional entity tables.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        $crate::TestBuilder::new().with_user_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_user_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
