use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_with::{NoneAsEmptyString, serde_as};

use crate::{deserialize_disallow_empty_string::disallow_empty_string, utils::get_current_time};

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_LONG: &str = "Name must be at most 100 characters";
pub const MAX_NAME_LENGTH: usize = 100;

/// Body of the HTML registration form.
#[serde_as]
#[derive(Debug, Default, Deserialize, Clone)]
pub struct RegistrationForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /api/register`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationPayload {
    #[serde(deserialize_with = "bounded_name")]
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: Option<&'static str>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub timestamp: u64,
}

impl Registration {
    pub fn new(name: String) -> Self {
        Self {
            name,
            timestamp: get_current_time(),
        }
    }
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration, RegistrationErrors> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();

        if name.is_empty() {
            return Err(RegistrationErrors {
                name: Some(NAME_REQUIRED),
            });
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RegistrationErrors {
                name: Some(NAME_TOO_LONG),
            });
        }

        Ok(Registration::new(name.to_string()))
    }
}

impl From<RegistrationPayload> for Registration {
    fn from(payload: RegistrationPayload) -> Self {
        Registration::new(payload.name)
    }
}

fn bounded_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = disallow_empty_string(deserializer)?;

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(Error::custom("name is too long"));
    }

    Ok(name)
}
