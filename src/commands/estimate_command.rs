//! Output size estimation command

use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::commands::{parse_region, parse_resolution};
use crate::constants::export::MAX_EDGE_PX;
use crate::constants::frame::TARGET_CODE;
use crate::coordinate::{to_target_frame, Rectangle};
use crate::errors::QInfraResult;
use crate::export::estimator::{clamp_resolution, estimate};

/// Command printing the pixel size and buffer size of an export
pub struct EstimateCommand {
    /// Region in the target frame
    region: Rectangle,
    meters_per_pixel: f64,
}

impl EstimateCommand {
    pub fn new(args: &ArgMatches) -> QInfraResult<Self> {
        let (rect, frame) = parse_region(args)?;
        let region = to_target_frame(rect, frame)?;
        let meters_per_pixel = clamp_resolution(parse_resolution(args)?);

        Ok(EstimateCommand { region, meters_per_pixel })
    }

    /// Estimate line as shown next to the resolution control
    pub fn describe(&self) -> String {
        match estimate(Some(&self.region), self.meters_per_pixel) {
            Some(estimate) if estimate.exceeds(MAX_EDGE_PX) => format!(
                "{} exceeds the limit of {} px per side",
                estimate, MAX_EDGE_PX
            ),
            Some(estimate) => estimate.to_string(),
            None => "No estimate".to_string(),
        }
    }
}

impl Command for EstimateCommand {
    fn execute(&self) -> QInfraResult<()> {
        info!("Estimating {} at {} m/px", self.region, self.meters_per_pixel);
        if estimate(Some(&self.region), self.meters_per_pixel).map_or(false, |e| e.exceeds(MAX_EDGE_PX)) {
            warn!("Export would be too large; lower the resolution or shrink the region");
        }
        println!("Region ({}): {}", TARGET_CODE, self.region);
        println!("Resolution: {} m/px", self.meters_per_pixel);
        println!("{}", self.describe());
        Ok(())
    }
}
