//! `aircalc quote`: price a set of quantities in one go.

use tracing::{debug, instrument};

use aircalc_core::{
    application::CalculatorSession,
    domain::{ServiceId, Summary},
    error::CalcError,
};

use crate::{
    cli::{QtyArg, QuoteArgs, ViewFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    render, wiring,
};

#[instrument(skip_all, fields(pairs = args.quantities.len()))]
pub fn execute(args: QuoteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut session = wiring::build_session(&config)?;
    let summary = apply_quantities(&mut session, &args.quantities)?;

    debug!(total = %summary.total_amount, "Quote computed");

    match super::view_format(args.format, &output) {
        ViewFormat::Json => output.json(&summary)?,
        ViewFormat::Table => {
            output.print(&render::summary_table(&summary))?;
            output.total(
                &render::total_line(&summary, &config.display.currency),
                false,
            )?;
        }
    }

    Ok(())
}

/// Feed every pair through the session the way form edits arrive.
///
/// Ids must parse and exist in the catalog; values are normalized, never
/// rejected.
fn apply_quantities(session: &mut CalculatorSession, pairs: &[QtyArg]) -> CliResult<Summary> {
    for pair in pairs {
        let id: ServiceId = pair.id.parse().map_err(CalcError::from)?;
        if !session.catalog().contains(id) {
            return Err(CliError::UnknownService { id: id.get() });
        }
        session.set_quantity_input(id, &pair.value);
    }
    Ok(session.summary())
}
