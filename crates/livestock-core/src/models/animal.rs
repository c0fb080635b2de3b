//! Animal models.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::coerce::{self, Coded};

/// Sex of an animal (`0` = male, `1` = female on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Coded for Sex {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Sex::Male),
            1 => Some(Sex::Female),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Sex::Male => 0,
            Sex::Female => 1,
        }
    }
}

/// Herd role (`tipe` on the wire: `0` = production, `1` = replacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalType {
    Production,
    Replacement,
}

impl Coded for AnimalType {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(AnimalType::Production),
            1 => Some(AnimalType::Replacement),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            AnimalType::Production => 0,
            AnimalType::Replacement => 1,
        }
    }
}

/// Whether the animal is currently producing (`0` = no, `1` = yes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    NotProducing,
    Producing,
}

impl Coded for Production {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Production::NotProducing),
            1 => Some(Production::Producing),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Production::NotProducing => 0,
            Production::Producing => 1,
        }
    }
}

macro_rules! serialize_as_code {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_u8(self.code())
                }
            }
        )*
    };
}

serialize_as_code!(Sex, AnimalType, Production);

/// Ear tag. Usually a number, but hand-typed tags such as `"A-12"` are kept
/// as text so they stay searchable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Caravan {
    Number(i64),
    Tag(String),
}

impl Caravan {
    /// The tag number, `None` for text tags.
    pub fn number(&self) -> Option<i64> {
        match self {
            Caravan::Number(n) => Some(*n),
            Caravan::Tag(_) => None,
        }
    }
}

impl fmt::Display for Caravan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caravan::Number(n) => write!(f, "{}", n),
            Caravan::Tag(tag) => f.write_str(tag),
        }
    }
}

impl Serialize for Caravan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Caravan::Number(n) => serializer.serialize_i64(*n),
            Caravan::Tag(tag) => serializer.serialize_str(tag),
        }
    }
}

/// An animal as returned by the `/animals` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalRecord {
    /// Identifier assigned by the remote store
    #[serde(default, deserialize_with = "coerce::id")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: String,
    /// Ear tag number, secondary search key (not guaranteed unique)
    #[serde(default, deserialize_with = "coerce::caravan")]
    pub caravan: Option<Caravan>,
    #[serde(default, deserialize_with = "coerce::coded")]
    pub sex: Option<Sex>,
    #[serde(default, deserialize_with = "coerce::coded")]
    pub tipe: Option<AnimalType>,
    #[serde(default, deserialize_with = "coerce::coded")]
    pub productive: Option<Production>,
    /// Daily liters as typed by the user ("3.5" or "3,5")
    #[serde(default, deserialize_with = "coerce::text")]
    pub liters_produce: String,
    #[serde(default, deserialize_with = "coerce::count")]
    pub cant_children: u32,
    /// Age in years
    #[serde(default, deserialize_with = "coerce::count")]
    pub age: u32,
}

impl AnimalRecord {
    /// Create a new, not yet stored animal with the form defaults.
    pub fn new(name: String, caravan: i64) -> Self {
        Self {
            id: String::new(),
            name,
            caravan: Some(Caravan::Number(caravan)),
            sex: Some(Sex::Male),
            tipe: Some(AnimalType::Production),
            productive: Some(Production::NotProducing),
            liters_produce: "0".into(),
            cant_children: 0,
            age: 0,
        }
    }

    /// Whether the remote store has assigned an identifier yet.
    pub fn is_stored(&self) -> bool {
        !self.id.is_empty()
    }

    /// Tag as text, empty when absent. `0` stays `"0"`.
    pub fn caravan_text(&self) -> String {
        self.caravan.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_producing(&self) -> bool {
        self.productive == Some(Production::Producing)
    }
}
