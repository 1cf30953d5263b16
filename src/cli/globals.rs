use secrecy::SecretString;

/// Resolved provider configuration: pool coordinates plus the credentials
/// used by the signed administrative call.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub client_id: String,
    pub user_pool_id: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: String,
    pub secret_access_key: SecretString,
    pub session_token: Option<SecretString>,
}

impl GlobalArgs {
    /// Derive the provider region from a `{region}_{id}` pool id, for setups
    /// that configure no explicit region.
    #[must_use]
    pub fn region_from_pool_id(user_pool_id: &str) -> Option<String> {
        let (region, id) = user_pool_id.split_once('_')?;

        if region.is_empty() || id.is_empty() {
            return None;
        }

        Some(region.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_pool_id() {
        assert_eq!(
            GlobalArgs::region_from_pool_id("us-east-1_AbCdEfGhI"),
            Some("us-east-1".to_string())
        );
        assert_eq!(
            GlobalArgs::region_from_pool_id("eu-west-1_X"),
            Some("eu-west-1".to_string())
        );
    }

    #[test]
    fn test_region_from_pool_id_rejects_malformed() {
        assert_eq!(GlobalArgs::region_from_pool_id("nounderscore"), None);
        assert_eq!(GlobalArgs::region_from_pool_id("_AbCdEfGhI"), None);
        assert_eq!(GlobalArgs::region_from_pool_id("us-east-1_"), None);
        assert_eq!(GlobalArgs::region_from_pool_id(""), None);
    }
}
