use anyhow::Result;
use syan_core::engine::{self, Engine};

pub fn run(engine_id: Option<&str>) -> Result<()> {
    let selected: Vec<&Engine> = match engine_id {
        Some(id) => vec![engine::find_engine(id)?],
        None => engine::engines().to_vec(),
    };

    for engine in selected {
        println!("{} ({})", engine.name, engine.id);
        println!("  {}", engine.description);
        println!("  Datasets:");
        for dataset in engine.datasets {
            let location = dataset
                .coordinates
                .map(|p| format!(" @ {:.4}, {:.4}", p.lat, p.lng))
                .unwrap_or_default();
            println!(
                "    {:<16} {:<28} {:<14} {}{}",
                dataset.id,
                dataset.display_name,
                dataset.domain.label(),
                dataset.coverage,
                location
            );
        }
        println!("  Analysis types:");
        for analysis in engine.analysis_types {
            let marker = if analysis.key == engine.default_analysis { "*" } else { " " };
            println!(
                "   {}{:<20} {} - {}",
                marker, analysis.key, analysis.label, analysis.description
            );
        }
        println!();
    }

    Ok(())
}
