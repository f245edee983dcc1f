use chrono::{DateTime, Duration, Local};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::catalog::Sport;
use crate::leaderboard::TeamStanding;
use crate::records::PlacementRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Format standings as a ranked table:
/// index, team, medal counts, points (right-aligned)
pub fn format_leaderboard(standings: &[TeamStanding], use_colors: bool) -> String {
    if standings.is_empty() {
        return "No team scores yet".to_string();
    }

    let team_width = standings
        .iter()
        .map(|s| s.team.chars().count())
        .max()
        .unwrap_or(0);

    standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let index_str = format!("{:>2}.", idx + 1);
            let team = pad(&s.team, team_width);
            let medals = format!(
                "{} gold  {} silver  {} bronze  {} 4th",
                s.gold, s.silver, s.bronze, s.fourth
            );
            let points = format!("{:>5} pts", s.points);

            if use_colors {
                format!(
                    "{} {}  {}  {}",
                    index_str.dimmed(),
                    team.bold(),
                    medals,
                    points.green()
                )
            } else {
                format!("{} {}  {}  {}", index_str, team, medals, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: rank, team, gold, silver, bronze, fourth, points (no headers, no colors)
pub fn format_tsv(standings: &[TeamStanding]) -> String {
    standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                idx + 1,
                s.team,
                s.gold,
                s.silver,
                s.bronze,
                s.fourth,
                s.points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn medal_for(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "🌿",
    }
}

/// Text for pasting into a group chat. Asterisks render as bold in WhatsApp.
pub fn format_share_message(
    title: &str,
    standings: &[TeamStanding],
    updated: DateTime<Local>,
    portal_url: Option<&str>,
) -> String {
    let mut text = format!(
        "🏆 *{}*\n🌲 *LIVE LEADERBOARD* (updated: {})\n\n",
        title,
        updated.format("%d %b %Y, %H:%M")
    );

    for (rank, s) in standings.iter().enumerate() {
        text.push_str(&format!(
            "{} {} — {} Gold | {} Silver | {} Bronze | {} pts\n",
            medal_for(rank),
            s.team,
            s.gold,
            s.silver,
            s.bronze,
            s.points
        ));
    }

    if let Some(url) = portal_url {
        text.push_str(&format!("\n📍 Portal: {}", url));
    }

    text
}

/// Format entries as a table: id, team, player, sport, age class, position, points
pub fn format_entries_table(records: &[PlacementRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No entries found.".to_string();
    }

    let team_width = records
        .iter()
        .map(|r| r.team.as_deref().unwrap_or("Individual").chars().count())
        .max()
        .unwrap_or(0);
    let sport_width = records
        .iter()
        .map(|r| r.sport.name().chars().count())
        .max()
        .unwrap_or(0);
    let class_width = records
        .iter()
        .map(|r| r.age_class.name().chars().count())
        .max()
        .unwrap_or(0);

    // id(5) + pos(4) + pts(4) + separators
    let fixed_width = 5 + team_width + sport_width + class_width + 4 + 4 + 2 * 6;
    let player_width = match get_terminal_width() {
        Some(width) if width > fixed_width + 10 => width - fixed_width,
        Some(_) => 10,
        None => usize::MAX,
    };

    records
        .iter()
        .map(|r| {
            let id = format!("{:>4}.", r.id);
            let team = pad(r.team.as_deref().unwrap_or("Individual"), team_width);
            let player = truncate(r.player.as_deref().unwrap_or("-"), player_width);
            let sport = pad(r.sport.name(), sport_width);
            let class = pad(r.age_class.name(), class_width);
            let position = r
                .position
                .map(|p| format!("{:>4}", ordinal(p)))
                .unwrap_or_else(|| "   -".to_string());
            let points = format!("{:>4}", r.points.unwrap_or(0));

            if use_colors {
                let team = if r.team.is_some() {
                    team.bold().to_string()
                } else {
                    team.dimmed().to_string()
                };
                format!(
                    "{}  {}  {}  {}  {}  {}  {}",
                    id.dimmed(),
                    team,
                    sport.cyan(),
                    class,
                    position,
                    points.green(),
                    player
                )
            } else {
                format!(
                    "{}  {}  {}  {}  {}  {}  {}",
                    id, team, sport, class, position, points, player
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "1st", "2nd", "3rd", "4th"
pub fn ordinal(position: u32) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", position, suffix)
}

/// Format sports as a numbered list
pub fn format_sport_list(sports: &[Sport]) -> String {
    if sports.is_empty() {
        return "No sports available.".to_string();
    }
    sports
        .iter()
        .enumerate()
        .map(|(idx, sport)| format!("{:>2}. {}", idx + 1, sport))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
