use crate::args::PeriodsArgs;
use crate::config::Config;
use anyhow::Result;
use delorean_engine::{PeriodScale, available_periods, period_label};

use super::{load_collection, yes_no};

pub fn handle(config: &Config, args: PeriodsArgs) -> Result<()> {
    let collection = load_collection(&args.file, args.source)?;
    let scale = args.scale.map(Into::into).unwrap_or(config.report.scale);

    println!("entries: {}", collection.len());
    println!("client data: {}", yes_no(collection.has_client_data));
    println!("billable data: {}", yes_no(collection.has_billable_data));

    if scale == PeriodScale::All {
        println!("all periods: every entry in one report");
        return Ok(());
    }

    let periods = available_periods(&collection.entries, scale);
    if periods.is_empty() {
        println!("No available {}s", scale);
        return Ok(());
    }

    println!("{} periods:", scale);
    for start in periods {
        println!("  {}  {}", start.format("%Y-%m-%d"), period_label(start, scale));
    }
    Ok(())
}
