pub mod about;
pub mod articles;
pub mod auth;
pub mod car_models;
pub mod contact;
pub mod homepage;
pub mod media;
pub mod pagination;

pub use about::AboutPageDto;
pub use articles::ArticleDto;
pub use auth::AdminPrincipal;
pub use car_models::{CarColorDto, CarModelDto, GalleryImageDto};
pub use contact::ContactSubmissionDto;
pub use homepage::{FeatureCardDto, HeroDto, HomepageDto, SectionBodyDto, SectionDto};
pub use media::{DeleteMediaResultDto, UploadTicketDto};
pub use pagination::Page;

pub mod serde_time {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::{DateTime, Deserialize, Deserializer, Serializer, Utc};

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let opt = Option::<String>::deserialize(deserializer)?;
            opt.map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
        }
    }
}

/// Publication flags travel as `0`/`1` on the wire. Incoming payloads may
/// also use JSON booleans or their string forms, as HTML forms tend to.
pub mod serde_flag {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagRepr {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    fn interpret<E: de::Error>(repr: FlagRepr) -> Result<bool, E> {
        match repr {
            FlagRepr::Bool(value) => Ok(value),
            FlagRepr::Int(0) => Ok(false),
            FlagRepr::Int(1) => Ok(true),
            FlagRepr::Int(other) => Err(E::custom(format!("expected 0 or 1, got {other}"))),
            FlagRepr::Text(text) => match text.trim() {
                "1" | "true" | "on" => Ok(true),
                "0" | "false" | "off" | "" => Ok(false),
                other => Err(E::custom(format!("expected a boolean flag, got `{other}`"))),
            },
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        interpret(FlagRepr::deserialize(deserializer)?)
    }

    pub mod option {
        use super::{Deserialize, Deserializer, FlagRepr, interpret};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<FlagRepr>::deserialize(deserializer)?
                .map(interpret)
                .transpose()
        }
    }

}
