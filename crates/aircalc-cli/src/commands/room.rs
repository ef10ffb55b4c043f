//! `aircalc room`: submit room parameters for a capacity calculation.
//!
//! The CLI does no sizing itself: it validates the form and hands the
//! request to the configured host.

use tracing::instrument;

use aircalc_core::domain::{RoomForm, RoomRequest};

use crate::{
    cli::{OutputFormat, RoomArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    wiring,
};

#[instrument(skip_all, fields(mansard = args.mansard, insolation = %args.insolation))]
pub fn execute(args: RoomArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let form = form_from_args(args);
    let request = wiring::build_room_service(&config).submit(&form)?;

    if output.format() == OutputFormat::Json {
        output.json(&request)?;
    } else {
        output.success("Room parameters submitted")?;
        for line in describe(&request) {
            output.print(&line)?;
        }
    }

    Ok(())
}

fn form_from_args(args: RoomArgs) -> RoomForm {
    RoomForm::new(
        args.area.unwrap_or_default(),
        args.height.unwrap_or_default(),
    )
    .insolation(args.insolation.into())
    .mansard(args.mansard)
}

fn describe(request: &RoomRequest) -> Vec<String> {
    vec![
        format!("  Area:           {} m²", request.room_area),
        format!("  Ceiling height: {} m", request.ceiling_height),
        format!("  Insolation:     {}", request.insolation),
        format!(
            "  Mansard:        {}",
            if request.has_mansard { "yes" } else { "no" }
        ),
    ]
}
