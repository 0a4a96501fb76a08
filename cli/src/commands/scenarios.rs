//! Scenario listing command

use anyhow::Result;
use claimpulse_core::scenario::{FeatureArea, ScenarioSet};
use serde_json::json;
use tracing::debug;

/// List the canned demo scenarios
pub async fn scenarios_command(area: Option<String>, json: bool) -> Result<()> {
    debug!(?area, json, "listing scenarios");

    match area {
        Some(tag) => {
            let set = ScenarioSet::for_tag(&tag);
            if json {
                println!("{}", serde_json::to_string_pretty(set.scenarios())?);
            } else if set.is_empty() {
                println!("No scenarios for area '{}'.", tag);
                println!();
                print_known_areas();
            } else {
                print_set(&tag, &set);
            }
        }
        None => {
            if json {
                let mut all = serde_json::Map::new();
                for area in FeatureArea::ALL {
                    let set = ScenarioSet::for_area(area);
                    all.insert(area.to_string(), json!(set.scenarios()));
                }
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for area in FeatureArea::ALL {
                    print_set(area.as_str(), &ScenarioSet::for_area(area));
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn print_set(tag: &str, set: &ScenarioSet) {
    println!("{} ({} scenarios)", tag, set.len());
    for scenario in set.scenarios() {
        println!("  {}. {}", scenario.id, scenario.name);
        println!("     {}", scenario.description);
        println!("     Expected: {}", scenario.expected_result);
    }
}

fn print_known_areas() {
    println!("Known areas:");
    for area in FeatureArea::ALL {
        println!("  {}", area.as_str());
    }
}
