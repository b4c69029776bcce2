use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn planet<'a>(&'a mut self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlanetFixtures<'a> {
    /// Insert a terrestrial desert planet with the given name.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                population: ActiveValue::Set(200000),
                terrain: ActiveValue::Set("desert".to_string()),
                climate: ActiveValue::Set("arid".to_string()),
                orbital_period: ActiveValue::Set(304.0),
                rotation_period: ActiveValue::Set(23.0),
                diameter: ActiveValue::Set(10465.0),
                r#type: ActiveValue::Set("terrestrial".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
