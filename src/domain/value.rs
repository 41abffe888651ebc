use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MRI API user name, sent with HTTP Basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// MRI API password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// HTTP Basic credentials for every API call.
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Address of the MRI API script, e.g. `https://host/mriapiservices/api.asp`.
///
/// Invariant: parses as an absolute URL. Any query string is dropped since every
/// request builds its own.
pub struct BaseUrl(url::Url);

impl BaseUrl {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = value.as_ref().trim();
        let mut parsed = url::Url::parse(input).map_err(|_| ValidationError::InvalidBaseUrl {
            input: input.to_owned(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ValidationError::InvalidBaseUrl {
                input: input.to_owned(),
            });
        }
        parsed.set_query(None);
        parsed.set_fragment(None);
        Ok(Self(parsed))
    }

    /// Join a domain (`https://host`) and an API path (`/mriapiservices/api.asp`).
    pub fn from_parts(domain: &str, endpoint: &str) -> Result<Self, ValidationError> {
        Self::new(format!("{domain}{endpoint}"))
    }

    pub fn as_url(&self) -> &url::Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
