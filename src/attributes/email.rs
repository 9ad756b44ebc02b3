use crate::foundation::error::{AvatarError, AvatarResult};

/// Identity derived from an email address for the initials avatar family.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EmailIdentity {
    /// Local part with every non-alphanumeric character removed.
    pub identity_key: String,
    /// Up to two uppercase display characters.
    pub initials: String,
}

impl EmailIdentity {
    /// Split `email` at the first `@` and derive the identity key and initials from the local
    /// part.
    ///
    /// - `first.last` or `first_last`: first character of each of the first two segments
    ///   (`.` is checked before `_`)
    /// - anything else: the first two characters
    pub fn parse(email: &str) -> AvatarResult<Self> {
        let local = email.split('@').next().unwrap_or_default().trim();
        if local.is_empty() {
            return Err(AvatarError::invalid(format!(
                "email '{email}' has an empty local part"
            )));
        }

        let identity_key: String = local
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if identity_key.is_empty() {
            return Err(AvatarError::invalid(format!(
                "email '{email}' has no alphanumeric characters in its local part"
            )));
        }

        let picked: Vec<char> =
            if let Some(sep) = ['.', '_'].into_iter().find(|c| local.contains(*c)) {
                local
                    .split(sep)
                    .take(2)
                    .filter_map(|part| part.chars().next())
                    .collect()
            } else {
                local.chars().take(2).collect()
            };
        // One display character per pick, even when the uppercase form expands (`ß` -> `SS`).
        let initials = picked
            .into_iter()
            .filter_map(|c| c.to_uppercase().next())
            .collect();

        Ok(Self {
            identity_key,
            initials,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/attributes/email.rs"]
mod tests;
