use std::io::{self, Write};

use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::utils::output_updated_user;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::tms::{TenantUserRoleApi, TmsClient, TmsError};
use crate::types::{Role, UpdateTenantUserRoles};

#[derive(Subcommand, Debug)]
pub enum UpdateCommands {
    #[command(about = "Update a user under a tenant")]
    User {
        #[command(subcommand)]
        cmd: UserCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    #[command(about = "Updates role of a user under a tenant")]
    Role(RoleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RoleArgs {
    #[arg(
        short = 'a',
        long,
        help = "API key to be used to connect to the tenant management service"
    )]
    pub api_key: String,

    #[arg(
        short = 't',
        long,
        help = "Id of the tenant the user belongs to (defaults to the configured tenant)"
    )]
    pub tenant_id: Option<String>,

    #[arg(short = 'u', long, help = "Id of the specific user")]
    pub user_id: String,

    #[arg(
        short = 'r',
        long,
        required = true,
        value_delimiter = ',',
        help = "Comma separated roles of the user. Should be either Tenant Admin or User"
    )]
    pub user_role: Vec<String>,
}

/// Validated input for a single role update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUpdate {
    pub tenant_id: Uuid,
    pub request: UpdateTenantUserRoles,
}

pub async fn handle(
    cmd: UpdateCommands,
    config: &AppConfig,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        UpdateCommands::User {
            cmd: UserCommands::Role(args),
        } => {
            tracing::info!("update user role called");

            let mut stdout = io::stdout();
            run_role_update(
                args,
                config,
                |tenant_id, api_key| {
                    TmsClient::new(&config.base_url, tenant_id, api_key, config.http_timeout())
                },
                &output_format,
                &mut stdout,
            )
            .await?;

            Ok(())
        }
    }
}

/// Validate flags, build the client through `connect` and push the new roles.
///
/// `connect` only runs once every check has passed, so bad input never
/// reaches the network. Returns the id of the updated user.
pub async fn run_role_update<A, F, W>(
    args: RoleArgs,
    config: &AppConfig,
    connect: F,
    output_format: &OutputFormat,
    out: &mut W,
) -> Result<Uuid>
where
    A: TenantUserRoleApi,
    F: FnOnce(Uuid, String) -> std::result::Result<A, TmsError>,
    W: Write,
{
    let update = validate_role_args(&args, config.tenant_id)?;
    tracing::debug!(
        tenant_id = %update.tenant_id,
        user_id = %update.request.user_id,
        "role update validated"
    );

    let api = connect(update.tenant_id, args.api_key)?;
    let response = api.update_tenant_user_role(&update.request).await?;

    output_updated_user(out, output_format, &update.request.user_id, &response)?;
    Ok(update.request.user_id)
}

/// Checks run in order and stop at the first failure.
pub fn validate_role_args(args: &RoleArgs, default_tenant_id: Uuid) -> Result<RoleUpdate> {
    let tenant_id = match args.tenant_id.as_deref() {
        Some(tenant_id) if !tenant_id.is_empty() => {
            Uuid::parse_str(tenant_id).map_err(CliError::InvalidTenantId)?
        }
        _ => default_tenant_id,
    };

    let user_id = Uuid::parse_str(&args.user_id).map_err(CliError::InvalidUserId)?;
    let roles = parse_roles(&args.user_role)?;

    Ok(RoleUpdate {
        tenant_id,
        request: UpdateTenantUserRoles { user_id, roles },
    })
}

fn parse_roles(raw: &[String]) -> Result<Vec<Role>> {
    // `-r ""` arrives as a single empty value
    if raw.iter().all(|role| role.is_empty()) {
        return Err(CliError::EmptyRoles);
    }

    raw.iter()
        .map(|role| role.parse::<Role>().map_err(CliError::from))
        .collect()
}
