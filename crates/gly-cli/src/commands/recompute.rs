//! Handle `gly recompute-ltv`.

use gly_core::responses::RecomputeResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let clients_updated = ctx.service.recompute_lifetime_values().await?;
    output(&RecomputeResponse { clients_updated }, flags.format)
}
