use super::*;
use minder_core::Unique;

#[derive(Debug, serde::Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, serde::Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Public view of an account. Built from the domain type, which cannot
/// carry the password digest in the first place.
#[derive(Debug, serde::Serialize)]
pub struct AccountInfo {
    pub id: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Account> for AccountInfo {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().to_string(),
            created_at: account.created(),
            updated_at: account.updated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minder_core::ID;

    #[test]
    fn account_info_has_no_digest_field() {
        let account = Account::new(
            ID::default(),
            "a@b.c".to_string(),
            chrono::Utc::now(),
            chrono::Utc::now(),
        );
        let json = serde_json::to_value(AccountInfo::from(&account)).unwrap();
        let keys = json.as_object().unwrap();
        assert!(keys.contains_key("id"));
        assert!(keys.contains_key("email"));
        assert!(!keys.contains_key("hashword"));
        assert!(!keys.contains_key("password"));
    }
}
