use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{non_null, present, MissingFields, NullField};

/// Public projection of a character
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub height: f64,
    pub skin_color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            hair_color: character.hair_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            height: character.height,
            skin_color: character.skin_color,
            kind: character.r#type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CharacterListDto {
    pub msg: String,
    #[serde(rename = "Characters")]
    pub characters: Vec<CharacterDto>,
}

/// Body of `POST /character`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<f64>,
    pub skin_color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub gender: String,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub height: f64,
    pub skin_color: String,
    pub kind: String,
}

impl TryFrom<CreateCharacterDto> for NewCharacter {
    type Error = MissingFields;

    fn try_from(dto: CreateCharacterDto) -> Result<Self, Self::Error> {
        let missing = MissingFields::from_checks(&[
            ("name", dto.name.is_none()),
            ("gender", dto.gender.is_none()),
            ("hair_color", dto.hair_color.is_none()),
            ("eye_color", dto.eye_color.is_none()),
            ("birth_year", dto.birth_year.is_none()),
            ("height", dto.height.is_none()),
            ("skin_color", dto.skin_color.is_none()),
            ("type", dto.kind.is_none()),
        ]);

        let (
            Some(name),
            Some(gender),
            Some(hair_color),
            Some(eye_color),
            Some(birth_year),
            Some(height),
            Some(skin_color),
            Some(kind),
        ) = (
            dto.name,
            dto.gender,
            dto.hair_color,
            dto.eye_color,
            dto.birth_year,
            dto.height,
            dto.skin_color,
            dto.kind,
        )
        else {
            return Err(missing);
        };

        Ok(Self {
            name,
            gender,
            hair_color,
            eye_color,
            birth_year,
            height,
            skin_color,
            kind,
        })
    }
}

/// Body of `PUT /character/{id}`, only the keys present are applied
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub gender: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub height: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub skin_color: Option<Option<String>>,
    #[serde(rename = "type", default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<f64>,
    pub skin_color: Option<String>,
    pub kind: Option<String>,
}

impl TryFrom<UpdateCharacterDto> for CharacterPatch {
    type Error = NullField;

    fn try_from(dto: UpdateCharacterDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: non_null("name", dto.name)?,
            gender: non_null("gender", dto.gender)?,
            hair_color: non_null("hair_color", dto.hair_color)?,
            eye_color: non_null("eye_color", dto.eye_color)?,
            birth_year: non_null("birth_year", dto.birth_year)?,
            height: non_null("height", dto.height)?,
            skin_color: non_null("skin_color", dto.skin_color)?,
            kind: non_null("type", dto.kind)?,
        })
    }
}
