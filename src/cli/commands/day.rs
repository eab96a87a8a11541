use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day_view::DayViewLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_view::{DayView, Provenance};
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_generated};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: d, json } = cmd {
        let target = match d {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let view = DayViewLogic::compose(&pool, target);

        if *json {
            let out = serde_json::to_string_pretty(&view)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &DayView) {
    println!("\n=== {} ===", view.date);

    if view.events.is_empty() {
        println!("Nothing scheduled.");
    } else {
        let mut table = Table::new(vec![
            Column {
                header: "START".to_string(),
                width: 16,
            },
            Column {
                header: "END".to_string(),
                width: 16,
            },
            Column {
                header: "TITLE".to_string(),
                width: 18,
            },
            Column {
                header: "SOURCE".to_string(),
                width: 9,
            },
        ]);

        for ev in &view.events {
            let generated = ev.provenance == Provenance::Generated;
            let source = if generated { "recurring" } else { "one-off" };
            table.add_row(vec![
                ev.start.format("%Y-%m-%d %H:%M").to_string(),
                ev.end.format("%Y-%m-%d %H:%M").to_string(),
                ev.title.clone(),
                format!("{}{}{}", color_for_generated(generated), source, RESET),
            ]);
        }

        print!("{}", table.render());
    }

    for p in &view.problems {
        warning(p);
    }
}
