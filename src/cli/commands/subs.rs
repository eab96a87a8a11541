use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::subscriptions::{insert_subscription, list_subscriptions};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_active};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Subs { add } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let sub = insert_subscription(&pool.conn, name)?;
            success(format!("Subscription '{}' created (id {}).", sub.name, sub.id));
            return Ok(());
        }

        let subs = list_subscriptions(&pool.conn)?;

        if subs.is_empty() {
            println!("No subscriptions. Run `weekplan init` first.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "ID".to_string(),
                width: 4,
            },
            Column {
                header: "NAME".to_string(),
                width: 16,
            },
            Column {
                header: "STATUS".to_string(),
                width: 8,
            },
        ]);

        for s in &subs {
            table.add_row(vec![
                s.id.to_string(),
                s.name.clone(),
                format!("{}{}{}", color_for_active(s.active), s.status_str(), RESET),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
