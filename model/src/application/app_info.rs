use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    ApplicationFlags, InstallParams, IntegrationType, IntegrationTypeConfiguration, Team,
};
use crate::user::User;
use crate::{Asset, ImageHash, Snowflake};

/// Application metadata as returned by the "get current application"
/// endpoint.
///
/// Deserialization is two stage: the raw wire payload is decoded first, then
/// the owning application id and integration type tags are stamped into the
/// nested install params, so `install_params.to_url()` needs no extra
/// context.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(from = "AppInfoData")]
pub struct AppInfo {
    pub id: Snowflake,
    pub name: Box<str>,
    pub description: Box<str>,
    pub icon: Option<ImageHash>,
    pub rpc_origins: Vec<Box<str>>,
    pub bot_public: bool,
    pub bot_require_code_grant: bool,
    pub owner: Option<User>,
    pub team: Option<Team>,
    summary: Box<str>,
    pub verify_key: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_sku_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ApplicationFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Box<str>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_params: Option<InstallParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_install_url: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_connections_verification_url: Option<Box<str>>,
    pub approximate_guild_count: u32,
    pub approximate_user_install_count: u32,
    pub integration_types_config: HashMap<IntegrationType, IntegrationTypeConfiguration>,
}

impl AppInfo {
    pub fn icon_asset(&self) -> Option<Asset> {
        self.icon
            .as_ref()
            .map(|hash| Asset::from_app_icon(self.id, hash))
    }

    /// The store embed cover image, only set for games sold on the platform.
    pub fn cover_image_asset(&self) -> Option<Asset> {
        self.cover_image
            .as_ref()
            .map(|hash| Asset::from_cover_image(self.id, hash))
    }

    /// Invite URL derived from the default install params, if any.
    pub fn invite_url(&self) -> Option<String> {
        self.install_params.as_ref().map(InstallParams::to_url)
    }

    /// Store page summary of the primary SKU.
    ///
    /// Deprecated upstream and always blanked by the server; kept for wire
    /// compatibility. Prefer `description`.
    pub fn summary(&self) -> &str {
        tracing::warn!(
            "summary is deprecated and always blank, consider using description instead"
        );
        &self.summary
    }
}

// Private wire mirror; missing required keys fail here, before any linking
// happens.
#[derive(Deserialize)]
struct AppInfoData {
    id: Snowflake,
    name: Box<str>,
    description: Box<str>,
    #[serde(deserialize_with = "crate::util::required_nullable")]
    icon: Option<ImageHash>,
    #[serde(default)]
    rpc_origins: Vec<Box<str>>,
    #[serde(default)]
    bot_public: bool,
    #[serde(default)]
    bot_require_code_grant: bool,
    owner: Option<User>,
    team: Option<Team>,
    #[serde(default)]
    summary: Box<str>,
    verify_key: Box<str>,
    guild_id: Option<Snowflake>,
    primary_sku_id: Option<Snowflake>,
    slug: Option<Box<str>>,
    cover_image: Option<ImageHash>,
    terms_of_service_url: Option<Box<str>>,
    privacy_policy_url: Option<Box<str>>,
    flags: Option<ApplicationFlags>,
    tags: Option<Vec<Box<str>>>,
    install_params: Option<InstallParams>,
    custom_install_url: Option<Box<str>>,
    role_connections_verification_url: Option<Box<str>>,
    #[serde(default)]
    approximate_guild_count: u32,
    #[serde(default)]
    approximate_user_install_count: u32,
    integration_types_config:
        Option<HashMap<IntegrationType, Option<IntegrationTypeConfiguration>>>,
}

impl From<AppInfoData> for AppInfo {
    fn from(data: AppInfoData) -> Self {
        let id = data.id;

        let install_params = data.install_params.map(|mut params| {
            params.application_id = id;
            params
        });

        let mut integration_types_config = HashMap::new();
        for (integration_type, config) in data.integration_types_config.unwrap_or_default() {
            let mut config = config.unwrap_or_default();

            if let Some(params) = config.install_params.as_mut() {
                params.application_id = id;
                params.integration_type = Some(integration_type);
            }

            integration_types_config.insert(integration_type, config);
        }

        AppInfo {
            id,
            name: data.name,
            description: data.description,
            icon: data.icon,
            rpc_origins: data.rpc_origins,
            bot_public: data.bot_public,
            bot_require_code_grant: data.bot_require_code_grant,
            owner: data.owner,
            team: data.team,
            summary: data.summary,
            verify_key: data.verify_key,
            guild_id: data.guild_id,
            primary_sku_id: data.primary_sku_id,
            slug: data.slug,
            cover_image: data.cover_image,
            terms_of_service_url: data.terms_of_service_url,
            privacy_policy_url: data.privacy_policy_url,
            flags: data.flags,
            tags: data.tags,
            install_params,
            custom_install_url: data.custom_install_url,
            role_connections_verification_url: data.role_connections_verification_url,
            approximate_guild_count: data.approximate_guild_count,
            approximate_user_install_count: data.approximate_user_install_count,
            integration_types_config,
        }
    }
}

/// Reduced application metadata embedded in other payloads, e.g. invites.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PartialAppInfo {
    pub id: Snowflake,
    pub name: Box<str>,
    pub icon: Option<ImageHash>,
    pub description: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_origins: Option<Vec<Box<str>>>,
    #[serde(default)]
    summary: Box<str>,
    pub verify_key: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service_url: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<Box<str>>,
}

impl PartialAppInfo {
    pub fn icon_asset(&self) -> Option<Asset> {
        self.icon
            .as_ref()
            .map(|hash| Asset::from_app_icon(self.id, hash))
    }

    /// See [`AppInfo::summary`].
    pub fn summary(&self) -> &str {
        tracing::warn!(
            "summary is deprecated and always blank, consider using description instead"
        );
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        json!({
            "id": "508391840525975553",
            "name": "Tickets",
            "description": "Support ticket bot",
            "icon": "1269e74af4df7417b13759eae50c83dc",
            "rpc_origins": ["https://example.com"],
            "bot_public": true,
            "bot_require_code_grant": false,
            "owner": {"id": "1", "username": "owner", "discriminator": "0", "avatar": null},
            "team": null,
            "summary": "",
            "verify_key": "abc123",
            "guild_id": "3",
            "primary_sku_id": null,
            "slug": null,
            "cover_image": "0269e74af4df7417b13759eae50c83dc",
            "terms_of_service_url": "https://example.com/tos",
            "privacy_policy_url": null,
            "flags": 540672,
            "tags": ["tickets", "support"],
            "install_params": {
                "scopes": ["applications.commands", "bot"],
                "permissions": "2048"
            },
            "custom_install_url": null,
            "role_connections_verification_url": null,
            "approximate_guild_count": 250,
            "integration_types_config": {
                "0": {
                    "oauth2_install_params": {
                        "scopes": ["bot"],
                        "permissions": "8"
                    }
                },
                "1": null
            }
        })
    }

    #[test]
    fn full_payload_parses_and_links_children() {
        let app: AppInfo = serde_json::from_value(full_payload()).unwrap();

        assert_eq!(app.id, Snowflake(508391840525975553));
        assert_eq!(&*app.name, "Tickets");
        assert_eq!(app.approximate_guild_count, 250);
        assert_eq!(app.approximate_user_install_count, 0);

        let params = app.install_params.as_ref().unwrap();
        assert_eq!(params.application_id(), app.id);
        assert_eq!(params.integration_type(), None);

        let url = app.invite_url().unwrap();
        assert!(url.contains("client_id=508391840525975553"));
        assert!(url.contains("&scope=applications.commands+bot"));
        assert!(url.contains("&permissions=2048"));
    }

    #[test]
    fn integration_types_config_is_keyed_and_linked() {
        let app: AppInfo = serde_json::from_value(full_payload()).unwrap();

        let guild_config = &app.integration_types_config[&IntegrationType::Guild];
        let params = guild_config.install_params.as_ref().unwrap();
        assert_eq!(params.application_id(), app.id);
        assert_eq!(params.integration_type(), Some(IntegrationType::Guild));
        assert!(params.to_url().ends_with("&integration_type=0"));

        // Null config value becomes an empty configuration
        let user_config = &app.integration_types_config[&IntegrationType::User];
        assert!(user_config.install_params.is_none());
    }

    #[test]
    fn unknown_integration_type_keys_are_preserved() {
        let mut payload = full_payload();
        payload["integration_types_config"]["5"] = json!({});

        let app: AppInfo = serde_json::from_value(payload).unwrap();
        assert!(app
            .integration_types_config
            .contains_key(&IntegrationType::Unknown(5)));
    }

    #[test]
    fn minimal_payload_defaults_optional_fields() {
        let app: AppInfo = serde_json::from_value(json!({
            "id": "2",
            "name": "Minimal",
            "description": "",
            "icon": null,
            "verify_key": "key"
        }))
        .unwrap();

        assert!(app.icon.is_none());
        assert!(app.icon_asset().is_none());
        assert!(app.rpc_origins.is_empty());
        assert!(app.flags.is_none());
        assert!(app.tags.is_none());
        assert!(app.install_params.is_none());
        assert!(app.invite_url().is_none());
        assert!(app.integration_types_config.is_empty());
        assert_eq!(app.summary(), "");
    }

    #[test]
    fn missing_icon_key_fails() {
        // The key is required even though its value may be null
        let err = serde_json::from_value::<AppInfo>(json!({
            "id": "2",
            "name": "Minimal",
            "description": "",
            "verify_key": "key"
        }));

        assert!(err.is_err());
    }

    #[test]
    fn missing_required_key_fails() {
        let err = serde_json::from_value::<AppInfo>(json!({
            "id": "2",
            "description": "",
            "icon": null,
            "verify_key": "key"
        }));

        assert!(err.is_err());
    }

    #[test]
    fn summary_is_stable_across_reads() {
        let app: AppInfo = serde_json::from_value(full_payload()).unwrap();

        let first = app.summary().to_owned();
        let second = app.summary().to_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn cover_image_asset_uses_store_path() {
        let app: AppInfo = serde_json::from_value(full_payload()).unwrap();

        let asset = app.cover_image_asset().unwrap();
        assert!(asset
            .url()
            .contains("/app-assets/508391840525975553/store/"));
    }

    #[test]
    fn partial_app_info_parses_subset() {
        let partial: PartialAppInfo = serde_json::from_value(json!({
            "id": "9",
            "name": "Embedded",
            "icon": null,
            "description": "desc",
            "verify_key": "key"
        }))
        .unwrap();

        assert!(partial.rpc_origins.is_none());
        assert!(partial.icon_asset().is_none());
        assert_eq!(partial.summary(), "");
    }
}
