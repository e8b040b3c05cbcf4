use chrono::NaiveDate;
use colored::*;
use matchday::api::LeagueApi;
use matchday::commands::{CmdMessage, CmdResult, LeagueReport, MatchSummary, MessageLevel};
use matchday::error::{LeagueError, Result};
use matchday::ranking::StandingsRow;
use std::io::{self, BufRead, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut api = LeagueApi::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu()?;
        let choice = match read_line(&mut input) {
            Ok(choice) => choice,
            // End of input at the menu is a normal way to leave.
            Err(LeagueError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e),
        };

        match choice.as_str() {
            "1" => handle_add_team(&mut api, &mut input)?,
            "2" => handle_record_match(&mut api, &mut input)?,
            "3" => handle_schedule_match(&mut api, &mut input)?,
            "4" => handle_play_scheduled(&mut api, &mut input)?,
            "5" => handle_standings(&api),
            "6" => handle_search(&api, &mut input)?,
            "7" => handle_report(&api),
            "8" => handle_undo(&mut api),
            "9" => {
                println!("Exiting.");
                return Ok(());
            }
            other => println!("{}", format!("Invalid choice: {other}").red()),
        }
    }
}

fn handle_add_team(api: &mut LeagueApi, input: &mut impl BufRead) -> Result<()> {
    let name = prompt(input, "Team name")?;
    print_outcome(api.add_team(&name));
    Ok(())
}

fn handle_record_match(api: &mut LeagueApi, input: &mut impl BufRead) -> Result<()> {
    let date = prompt_date(input, "Match date (YYYY-MM-DD)")?;
    let home = prompt(input, "Home team")?;
    let away = prompt(input, "Away team")?;
    let home_score = prompt_score(input, &format!("{home} score"))?;
    let away_score = prompt_score(input, &format!("{away} score"))?;

    print_outcome(api.record_match(date, &home, &away, home_score, away_score));
    Ok(())
}

fn handle_schedule_match(api: &mut LeagueApi, input: &mut impl BufRead) -> Result<()> {
    let date = prompt_date(input, "Match date (YYYY-MM-DD)")?;
    let home = prompt(input, "Home team")?;
    let away = prompt(input, "Away team")?;

    print_outcome(api.schedule_match(date, &home, &away));
    Ok(())
}

fn handle_play_scheduled(api: &mut LeagueApi, input: &mut impl BufRead) -> Result<()> {
    let Some(fixture) = api.next_fixture() else {
        println!("{}", "No scheduled matches to play.".yellow());
        return Ok(());
    };

    println!("Playing scheduled match: {} vs {}", fixture.home, fixture.away);
    let home_score = prompt_score(input, &format!("{} score", fixture.home))?;
    let away_score = prompt_score(input, &format!("{} score", fixture.away))?;

    print_outcome(api.play_scheduled(home_score, away_score));
    Ok(())
}

fn handle_standings(api: &LeagueApi) {
    match api.standings() {
        Ok(result) => {
            print_messages(&result.messages);
            print_standings(&result.standings);
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn handle_search(api: &LeagueApi, input: &mut impl BufRead) -> Result<()> {
    let start = prompt_date(input, "Start date (YYYY-MM-DD)")?;
    let end = prompt_date(input, "End date (YYYY-MM-DD)")?;

    match api.search_matches(start, end) {
        Ok(result) => {
            println!("\nMatches between {start} and {end}:");
            print_matches(&result.matches);
            print_messages(&result.messages);
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn handle_report(api: &LeagueApi) {
    match api.report() {
        Ok(result) => {
            if let Some(report) = &result.report {
                print_report(report);
            }
            print_messages(&result.messages);
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn handle_undo(api: &mut LeagueApi) {
    print_outcome(api.undo_last());
}

// --- input ---

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim().to_string())
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    read_line(input)
}

fn prompt_date(input: &mut impl BufRead, label: &str) -> Result<NaiveDate> {
    loop {
        let text = prompt(input, label)?;
        match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("{}", "Enter a date as YYYY-MM-DD.".red()),
        }
    }
}

fn prompt_score(input: &mut impl BufRead, label: &str) -> Result<u32> {
    loop {
        let text = prompt(input, label)?;
        match text.parse() {
            Ok(score) => return Ok(score),
            Err(_) => println!("{}", "Enter a non-negative whole number.".red()),
        }
    }
}

// --- output ---

fn print_menu() -> Result<()> {
    println!();
    println!("{}", "Matchday League Tracker".bold());
    println!("1. Add new team");
    println!("2. Record match result");
    println!("3. Schedule future match");
    println!("4. Play next scheduled match");
    println!("5. Display league standings");
    println!("6. Search matches by date range");
    println!("7. Generate statistical report");
    println!("8. Undo last match");
    println!("9. Exit");
    print!("Enter your choice: ");
    io::stdout().flush()?;
    Ok(())
}

fn print_outcome(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 18;
const STAT_WIDTH: usize = 6;

fn print_standings(rows: &[StandingsRow]) {
    if rows.is_empty() {
        return;
    }

    let divider = "-".repeat(NAME_WIDTH + STAT_WIDTH * 4);
    println!("\nLeague Standings:");
    println!("{divider}");
    println!(
        "{}{:>w$}{:>w$}{:>w$}{:>w$}",
        pad_name("Team"),
        "Pts",
        "GS",
        "GC",
        "GD",
        w = STAT_WIDTH
    );
    println!("{divider}");
    for row in rows {
        println!(
            "{}{:>w$}{:>w$}{:>w$}{:>w$}",
            pad_name(&row.name),
            row.points,
            row.goals_scored,
            row.goals_conceded,
            row.goal_difference(),
            w = STAT_WIDTH
        );
    }
    println!("{divider}");
}

/// Pads (or truncates with an ellipsis) to the name column, by display width
/// rather than char count so wide glyphs stay aligned.
fn pad_name(name: &str) -> String {
    let mut out = String::new();
    let mut used = 0;
    if name.width() <= NAME_WIDTH - 2 {
        out.push_str(name);
        used = name.width();
    } else {
        for c in name.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > NAME_WIDTH - 3 {
                out.push('…');
                used += 1;
                break;
            }
            out.push(c);
            used += w;
        }
    }
    out + &" ".repeat(NAME_WIDTH - used)
}

fn print_matches(matches: &[MatchSummary]) {
    println!("-----------------------------------------");
    for m in matches {
        println!("{m}");
    }
}

fn print_report(report: &LeagueReport) {
    println!("\nLeague Analysis Report");
    println!("======================");
    println!("Total teams: {}", report.team_count);
    println!("Total matches played: {}", report.match_count);
    println!("Total goals scored: {}", report.total_goals);
    if report.match_count > 0 {
        println!("Average goals per match: {:.2}", report.average_goals);
    }

    if !report.processed_teams.is_empty() {
        println!("\nTeam processing log:");
        for name in &report.processed_teams {
            println!("Processed: {name}");
        }
    }
}
