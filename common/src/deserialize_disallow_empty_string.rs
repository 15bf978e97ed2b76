use serde::{Deserialize, Deserializer, de::Error};

// blank strings count as missing, the surrounding whitespace is dropped
pub fn disallow_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let input_string: Option<String> = Option::deserialize(deserializer)?;

    let Some(raw_string) = input_string else {
        return Err(Error::custom("field is not a string"));
    };

    let trimmed = raw_string.trim();

    if trimmed.is_empty() {
        return Err(Error::custom("field is empty"));
    }

    Ok(trimmed.to_string())
}
