//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::NEW_USER_ID;
use crate::error::{DomainError, DomainResult};
use crate::validation::{
    validate_first_name, validate_last_name, validate_password, validate_username,
};

/// User domain entity
///
/// Every constructor and setter validates its input, so a `User` value always
/// satisfies the attribute rules. Deserialization goes through [`UserRecord`]
/// and the same checks.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    user_id: i32,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    administrator: bool,
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("administrator", &self.administrator)
            .finish()
    }
}

impl User {
    /// Create a new, not yet persisted user account.
    ///
    /// The user id is set to [`NEW_USER_ID`].
    ///
    /// # Errors
    /// Returns `InvalidAttribute` if any attribute fails validation.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        is_administrator: bool,
    ) -> DomainResult<Self> {
        Self::with_id(
            NEW_USER_ID,
            username,
            password,
            first_name,
            last_name,
            is_administrator,
        )
    }

    /// Rebuild a user account with a known id.
    ///
    /// # Errors
    /// Returns `InvalidAttribute` if any attribute fails validation.
    pub fn with_id(
        user_id: i32,
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        is_administrator: bool,
    ) -> DomainResult<Self> {
        let username = username.into();
        let password = password.into();
        let first_name = first_name.into();
        let last_name = last_name.into();

        validate_username(&username)?;
        validate_password(&password)?;
        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;

        Ok(Self {
            user_id,
            username,
            password,
            first_name,
            last_name,
            administrator: is_administrator,
        })
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn set_user_id(&mut self, user_id: i32) {
        self.user_id = user_id;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Update the username
    pub fn set_username(&mut self, username: impl Into<String>) -> DomainResult<()> {
        let username = username.into();
        validate_username(&username)?;
        self.username = username;
        Ok(())
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Update the password (stored as given)
    pub fn set_password(&mut self, password: impl Into<String>) -> DomainResult<()> {
        let password = password.into();
        validate_password(&password)?;
        self.password = password;
        Ok(())
    }

    /// Check a candidate password against the stored one.
    ///
    /// Plain, case-sensitive equality. A missing candidate never matches.
    ///
    /// ```
    /// # use domain::User;
    /// let user = User::new("alice", "secret", "Alice", "Smith", false).unwrap();
    /// assert!(user.is_valid_password("secret"));
    /// assert!(!user.is_valid_password(None));
    /// ```
    pub fn is_valid_password<'a>(&self, candidate: impl Into<Option<&'a str>>) -> bool {
        candidate
            .into()
            .is_some_and(|candidate| candidate == self.password)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Update the first name
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> DomainResult<()> {
        let first_name = first_name.into();
        validate_first_name(&first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Update the last name
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> DomainResult<()> {
        let last_name = last_name.into();
        validate_last_name(&last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    /// Check if user has administrator rights
    pub fn is_administrator(&self) -> bool {
        self.administrator
    }

    /// Grant or revoke administrator rights
    pub fn set_administrator(&mut self, administrator: bool) {
        self.administrator = administrator;
    }

    /// Apply several changes at once.
    ///
    /// All supplied values are validated before any is written, so on error
    /// the user is left exactly as it was.
    pub fn apply(&mut self, update: UpdateUser) -> DomainResult<()> {
        if let Some(username) = &update.username {
            validate_username(username)?;
        }
        if let Some(password) = &update.password {
            validate_password(password)?;
        }
        if let Some(first_name) = &update.first_name {
            validate_first_name(first_name)?;
        }
        if let Some(last_name) = &update.last_name {
            validate_last_name(last_name)?;
        }

        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(administrator) = update.administrator {
            self.administrator = administrator;
        }
        Ok(())
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

/// Unvalidated user data as it arrives from outside the domain
///
/// Text attributes are optional so a missing key surfaces as the attribute's
/// own validation error.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub administrator: bool,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("administrator", &self.administrator)
            .finish()
    }
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        // Absent attributes fail the same rule as empty ones
        User::with_id(
            record.user_id,
            record.username.unwrap_or_default(),
            record.password.unwrap_or_default(),
            record.first_name.unwrap_or_default(),
            record.last_name.unwrap_or_default(),
            record.administrator,
        )
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: Some(user.username.clone()),
            password: Some(user.password.clone()),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            administrator: user.administrator,
        }
    }
}

/// User update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    /// New password (minimum 5 characters)
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub administrator: Option<bool>,
}

/// User response (safe to show; no password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub administrator: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            administrator: user.administrator,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            administrator: user.administrator,
        }
    }
}
