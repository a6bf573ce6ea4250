use poise::CreateReply;

use super::{Context, Error};
use crate::{update::LOCAL_VERSION, utils::macros::config};

/// Shows the running version and whether update checks are enabled
#[poise::command(slash_command, prefix_command)]
pub(super) async fn version(ctx: Context<'_>) -> Result<(), Error> {
    let config = config!(ctx.data());

    let updates = match config.update.keep_updated {
        true => "enabled",
        false => "disabled",
    };

    ctx.send(
        CreateReply::default()
            .content(format!("running linears-bot {LOCAL_VERSION}, update checks {updates}."))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
