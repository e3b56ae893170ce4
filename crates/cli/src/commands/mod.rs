//! Subcommand dispatch

mod session;
mod shipments;
mod statuses;

use crate::context::AppContext;
use crate::Command;

/// Run a parsed `command`.
pub async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    if !command.is_public() {
        ctx.require_session()?;
    }

    match command {
        Command::Login { user, password } => session::login(ctx, &user, password).await,
        Command::Logout => session::logout(ctx),
        Command::Whoami => {
            session::whoami(ctx);
            Ok(())
        }
        Command::Integrations => {
            session::integrations(ctx);
            Ok(())
        }
        Command::Select { id } => session::select(ctx, &id),
        Command::Statuses { category, search } => {
            statuses::statuses(ctx, category.as_deref(), search.as_deref())
        }
        Command::List { search, statuses } => {
            shipments::list(ctx, search.as_deref(), &statuses).await
        }
        Command::Show { id } => shipments::show(ctx, &id).await,
        Command::UpdateStatus { id, code, note, receiver, invoice_keys, attachments } => {
            let change =
                shipments::StatusChange { code, note, receiver, invoice_keys, attachments };
            shipments::update_status(ctx, &id, change).await
        }
        Command::Upload { id, paths } => shipments::upload(ctx, &id, &paths).await,
        Command::Tracking { id } => shipments::tracking(ctx, &id).await,
    }
}
