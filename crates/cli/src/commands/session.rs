use anyhow::anyhow;

use crate::context::AppContext;

pub async fn login(
    ctx: &AppContext,
    username: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = password.ok_or_else(|| anyhow!("missing <PASSWORD> (or set CARGAS_PASSWORD)"))?;

    let credential = ctx.auth.login(username, &password).await?;
    println!(
        "Logged in as {} until {}",
        credential.username,
        credential.expires_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!("Active integration: {}", ctx.current().display_name);
    Ok(())
}

pub fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.auth.logout()?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) {
    let username = ctx.auth.current_username().unwrap_or_else(|| "-".to_string());
    println!("User:        {username}");
    println!("Integration: {}", ctx.current().display_name);

    if let Some(claims) = ctx.auth.decode_token_payload() {
        for (key, value) in claims {
            println!("  {key}: {value}");
        }
    }
}

pub fn integrations(ctx: &AppContext) {
    let current = ctx.current();
    for integration in ctx.registry.list() {
        let marker = if integration.id == current.id { '*' } else { ' ' };
        let role = if integration.is_auth_provider { " (login)" } else { "" };
        println!(
            "{marker} {:<10} {}{role}  {}",
            integration.id,
            integration.display_name,
            integration.api_root()
        );
    }
}

pub fn select(ctx: &AppContext, requested: &str) -> anyhow::Result<()> {
    let selected = ctx.selection.select(requested)?;
    if selected.id != requested {
        println!("Unknown integration '{requested}', using {}", selected.display_name);
    } else {
        println!("Active integration: {}", selected.display_name);
    }
    Ok(())
}
