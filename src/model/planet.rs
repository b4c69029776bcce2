use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{non_null, present, MissingFields, NullField};

/// Public projection of a planet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
    pub orbital_period: f64,
    pub rotation_period: f64,
    pub diameter: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            terrain: planet.terrain,
            climate: planet.climate,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
            diameter: planet.diameter,
            kind: planet.r#type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanetListDto {
    pub msg: String,
    #[serde(rename = "Planets")]
    pub planets: Vec<PlanetDto>,
}

/// Body of `POST /planet`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub orbital_period: Option<f64>,
    pub rotation_period: Option<f64>,
    pub diameter: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A planet payload with every required field present
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanet {
    pub name: String,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
    pub orbital_period: f64,
    pub rotation_period: f64,
    pub diameter: f64,
    pub kind: String,
}

impl TryFrom<CreatePlanetDto> for NewPlanet {
    type Error = MissingFields;

    fn try_from(dto: CreatePlanetDto) -> Result<Self, Self::Error> {
        let missing = MissingFields::from_checks(&[
            ("name", dto.name.is_none()),
            ("population", dto.population.is_none()),
            ("terrain", dto.terrain.is_none()),
            ("climate", dto.climate.is_none()),
            ("orbital_period", dto.orbital_period.is_none()),
            ("rotation_period", dto.rotation_period.is_none()),
            ("diameter", dto.diameter.is_none()),
            ("type", dto.kind.is_none()),
        ]);

        let (
            Some(name),
            Some(population),
            Some(terrain),
            Some(climate),
            Some(orbital_period),
            Some(rotation_period),
            Some(diameter),
            Some(kind),
        ) = (
            dto.name,
            dto.population,
            dto.terrain,
            dto.climate,
            dto.orbital_period,
            dto.rotation_period,
            dto.diameter,
            dto.kind,
        )
        else {
            return Err(missing);
        };

        Ok(Self {
            name,
            population,
            terrain,
            climate,
            orbital_period,
            rotation_period,
            diameter,
            kind,
        })
    }
}

/// Body of `PUT /planet/{id}`, only the keys present are applied
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePlanetDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub terrain: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub orbital_period: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub rotation_period: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub diameter: Option<Option<f64>>,
    #[serde(rename = "type", default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
}

/// The fields of a planet to overwrite, `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub orbital_period: Option<f64>,
    pub rotation_period: Option<f64>,
    pub diameter: Option<f64>,
    pub kind: Option<String>,
}

impl TryFrom<UpdatePlanetDto> for PlanetPatch {
    type Error = NullField;

    fn try_from(dto: UpdatePlanetDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: non_null("name", dto.name)?,
            population: non_null("population", dto.population)?,
            terrain: non_null("terrain", dto.terrain)?,
            climate: non_null("climate", dto.climate)?,
            orbital_period: non_null("orbital_period", dto.orbital_period)?,
            rotation_period: non_null("rotation_period", dto.rotation_period)?,
            diameter: non_null("diameter", dto.diameter)?,
            kind: non_null("type", dto.kind)?,
        })
    }
}
