use std::io::Write;

use serde_json::json;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::types::TenantUserRoles;

/// Output the result of a role update in the appropriate format
pub fn output_updated_user<W: Write>(
    out: &mut W,
    output_format: &OutputFormat,
    user_id: &Uuid,
    response: &TenantUserRoles,
) -> Result<()> {
    // Render before writing anything so a serialization failure prints nothing
    let body = serde_json::to_string_pretty(response)?;

    match output_format {
        OutputFormat::Json => {
            writeln!(out, "{}", body)?;
        }
        OutputFormat::Text => {
            writeln!(out, "\nUpdated User: {}\n", user_id)?;
            writeln!(out, "{}", body)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let response = json!({
                "success": false,
                "error": message
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}
