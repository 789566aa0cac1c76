use anyhow::Result;

use pingpong_ranking::cli::Command;
use pingpong_ranking::config::AppConfig;
use pingpong_ranking::{
    handle_add_match, handle_add_player, handle_completions, handle_delete_match, handle_hall_of_fame,
    handle_matches, handle_player, handle_ranking, handle_rename, handle_rules, handle_select,
    handle_set_retired, interpret, load_config, open_service,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = load_config(&cli);
    execute_command(&cli.command, &config, cli.json)
}

fn execute_command(command: &Command, config: &AppConfig, json: bool) -> Result<()> {
    match command {
        Command::Ranking { retired } => handle_ranking(&open_service(config)?, *retired, json),
        Command::Matches => handle_matches(&open_service(config)?, json),
        Command::HallOfFame => handle_hall_of_fame(&open_service(config)?, json),
        Command::Player { name } => handle_player(&open_service(config)?, name, json),
        Command::AddPlayer { first, last } => handle_add_player(&open_service(config)?, first, last, json),
        Command::Select { name, team, slot } => {
            handle_select(&open_service(config)?, name, *team, *slot, json)
        }
        Command::AddMatch {
            match_type,
            team1,
            team2,
            sets,
        } => handle_add_match(&open_service(config)?, *match_type, team1, team2, sets, json),
        Command::DeleteMatch { id } => handle_delete_match(&open_service(config)?, id, json),
        Command::Rename { name, first, last } => {
            handle_rename(&open_service(config)?, name, first, last, json)
        }
        Command::Retire { name } => handle_set_retired(&open_service(config)?, name, true, json),
        Command::Reactivate { name } => handle_set_retired(&open_service(config)?, name, false, json),
        Command::Rules => handle_rules(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
