use super::IntegrationType;
use crate::{PermissionBitSet, Snowflake};
use serde::{Deserialize, Serialize};

/// OAuth2 installation parameters for one integration context.
///
/// The owning application id and the integration type tag are not part of the
/// wire payload; they are stamped in when the enclosing [`AppInfo`] is
/// deserialized.
///
/// [`AppInfo`]: super::AppInfo
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstallParams {
    #[serde(skip)]
    pub(crate) application_id: Snowflake,
    #[serde(skip)]
    pub(crate) integration_type: Option<IntegrationType>,
    pub scopes: Vec<Box<str>>,
    pub permissions: PermissionBitSet,
}

impl InstallParams {
    pub fn application_id(&self) -> Snowflake {
        self.application_id
    }

    pub fn integration_type(&self) -> Option<IntegrationType> {
        self.integration_type
    }

    /// Builds the authorization URL used to install the application. Scope
    /// order is preserved; no validation is performed beyond formatting.
    pub fn to_url(&self) -> String {
        let mut url = format!(
            "https://discord.com/oauth2/authorize?client_id={}&scope={}&permissions={}",
            self.application_id,
            self.scopes.join("+"),
            self.permissions,
        );

        if let Some(integration_type) = self.integration_type {
            url.push_str(&format!("&integration_type={}", integration_type));
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(integration_type: Option<IntegrationType>) -> InstallParams {
        InstallParams {
            application_id: Snowflake(508391840525975553),
            integration_type,
            scopes: vec!["applications.commands".into(), "bot".into()],
            permissions: PermissionBitSet(2048),
        }
    }

    #[test]
    fn to_url_embeds_id_scopes_and_permissions() {
        let url = params(None).to_url();

        assert_eq!(
            url,
            "https://discord.com/oauth2/authorize?client_id=508391840525975553\
             &scope=applications.commands+bot&permissions=2048"
        );
    }

    #[test]
    fn to_url_appends_integration_type_when_tagged() {
        let url = params(Some(IntegrationType::User)).to_url();

        assert!(url.ends_with("&integration_type=1"));
    }

    #[test]
    fn scope_order_is_preserved() {
        let mut params = params(None);
        params.scopes = vec!["bot".into(), "applications.commands".into()];

        assert!(params
            .to_url()
            .contains("&scope=bot+applications.commands&"));
    }
}
