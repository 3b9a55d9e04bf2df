mod app_info;
pub use app_info::{AppInfo, PartialAppInfo};

mod application_flags;
pub use application_flags::{ApplicationFlag, ApplicationFlags};

mod install_params;
pub use install_params::InstallParams;

mod integration_type;
pub use integration_type::{IntegrationType, IntegrationTypeConfiguration};

mod team;
pub use team::{MembershipState, Team, TeamMember};
