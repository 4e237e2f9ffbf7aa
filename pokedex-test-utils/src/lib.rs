pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::{factory, PokemonFixture, SpeciesFixture},
        TestBuilder, TestError, TestSetup,
    };
}
