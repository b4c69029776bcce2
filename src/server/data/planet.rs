use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::planet::{NewPlanet, PlanetPatch},
    server::model::db::PlanetModel,
};

/// Queries and writes on the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, planet: NewPlanet) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            population: ActiveValue::Set(planet.population),
            terrain: ActiveValue::Set(planet.terrain),
            climate: ActiveValue::Set(planet.climate),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            diameter: ActiveValue::Set(planet.diameter),
            r#type: ActiveValue::Set(planet.kind),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID, `Ok(None)` if it does not exist
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Overwrites the fields present in `patch`, leaving all others untouched
    ///
    /// Returns `Ok(None)` if no planet has the given ID.
    pub async fn update(
        &self,
        planet_id: i32,
        patch: PlanetPatch,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let Some(planet) = self.get_by_id(planet_id).await? else {
            return Ok(None);
        };

        let mut planet_am = planet.into_active_model();
        if let Some(name) = patch.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(population) = patch.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(terrain) = patch.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(climate) = patch.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(orbital_period) = patch.orbital_period {
            planet_am.orbital_period = ActiveValue::Set(orbital_period);
        }
        if let Some(rotation_period) = patch.rotation_period {
            planet_am.rotation_period = ActiveValue::Set(rotation_period);
        }
        if let Some(diameter) = patch.diameter {
            planet_am.diameter = ActiveValue::Set(diameter);
        }
        if let Some(kind) = patch.kind {
            planet_am.r#type = ActiveValue::Set(kind);
        }

        // Nothing to write for an empty patch
        if !planet_am.is_changed() {
            return self.get_by_id(planet_id).await;
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
