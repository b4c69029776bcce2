use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::planet::{NewPlanet, PlanetDto, PlanetPatch},
    server::{data::planet::PlanetRepository, error::Error},
};

static PLANET_CONFLICT: &str = "A planet with this name already exists";

/// Service for managing planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet.
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a planet by ID, `Ok(None)` if it does not exist.
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Creates a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The created planet with its generated ID
    /// - `Err(Error::Conflict)` - A planet with the same name exists
    /// - `Err(Error::DbErr)` - Database insert failed
    pub async fn create_planet(&self, planet: NewPlanet) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .create(planet)
            .await
            .map_err(|e| Error::conflict_on_unique(e, PLANET_CONFLICT))?;

        tracing::debug!(planet_id = %planet.id, "Created planet");

        Ok(planet.into())
    }

    /// Applies a partial update to a planet within a single transaction.
    ///
    /// # Returns
    /// - `Ok(Some(PlanetDto))` - The planet after the update
    /// - `Ok(None)` - Planet not found, nothing was written
    /// - `Err(Error::Conflict)` - The new name is used by another planet
    /// - `Err(Error::DbErr)` - Database update failed, the transaction is rolled back
    pub async fn update_planet(
        &self,
        planet_id: i32,
        patch: PlanetPatch,
    ) -> Result<Option<PlanetDto>, Error> {
        let txn = self.db.begin().await?;

        let planet = PlanetRepository::new(&txn)
            .update(planet_id, patch)
            .await
            .map_err(|e| Error::conflict_on_unique(e, PLANET_CONFLICT))?;

        txn.commit().await?;

        Ok(planet.map(PlanetDto::from))
    }

    /// Deletes a planet, returning whether it existed.
    pub async fn delete_planet(&self, planet_id: i32) -> Result<bool, Error> {
        let result = PlanetRepository::new(self.db).delete(planet_id).await?;

        if result.rows_affected > 0 {
            tracing::debug!(planet_id = %planet_id, "Deleted planet");
        }

        Ok(result.rows_affected > 0)
    }
}
